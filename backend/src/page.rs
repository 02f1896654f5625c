use std::io;
use std::ptr;

/// Default executable page size: 4 KiB.
pub const DEFAULT_PAGE_SIZE: usize = 4096;

/// A single mmap'd region holding both the emitted code and, after
/// finalize, the 32-byte-aligned constant pool.
///
/// The mapping is readable, writable and executable for its whole
/// lifetime: the session is single-threaded and issues an explicit
/// fence before execution instead of flipping page protections.
pub struct ExecPage {
    ptr: *mut u8,
    size: usize,
}

// SAFETY: ExecPage owns its mmap'd memory exclusively.
unsafe impl Send for ExecPage {}

impl ExecPage {
    /// Map a new RWX region of the given size (rounded up to the
    /// system page size).
    pub fn new(size: usize) -> io::Result<Self> {
        let page_size = page_size();
        let size = (size.max(1) + page_size - 1) & !(page_size - 1);

        // SAFETY: anonymous private mapping, no file backing.
        let ptr = unsafe {
            libc::mmap(
                ptr::null_mut(),
                size,
                libc::PROT_READ | libc::PROT_WRITE | libc::PROT_EXEC,
                libc::MAP_PRIVATE | libc::MAP_ANONYMOUS,
                -1,
                0,
            )
        };

        if ptr == libc::MAP_FAILED {
            return Err(io::Error::last_os_error());
        }

        Ok(Self {
            ptr: ptr as *mut u8,
            size,
        })
    }

    /// Total capacity in bytes.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.size
    }

    /// Raw pointer to the start of the region.
    #[inline]
    pub fn base_ptr(&self) -> *const u8 {
        self.ptr as *const u8
    }

    /// Write one byte at `offset`.
    #[inline]
    pub fn write_u8(&mut self, offset: usize, val: u8) {
        assert!(offset < self.size);
        unsafe { self.ptr.add(offset).write(val) };
    }

    /// Write a slice at `offset`.
    #[inline]
    pub fn write_bytes(&mut self, offset: usize, data: &[u8]) {
        assert!(offset + data.len() <= self.size);
        unsafe {
            ptr::copy_nonoverlapping(data.as_ptr(), self.ptr.add(offset), data.len());
        }
    }

    /// Patch a little-endian u32 at `offset` (for back-patching
    /// displacements).
    #[inline]
    pub fn patch_u32(&mut self, offset: usize, val: u32) {
        assert!(offset + 4 <= self.size);
        unsafe { (self.ptr.add(offset) as *mut u32).write_unaligned(val) };
    }

    /// Read back a little-endian u32 at `offset`.
    #[inline]
    pub fn read_u32(&self, offset: usize) -> u32 {
        assert!(offset + 4 <= self.size);
        unsafe { (self.ptr.add(offset) as *const u32).read_unaligned() }
    }

    /// The first `len` bytes of the region as a slice.
    pub fn as_slice(&self, len: usize) -> &[u8] {
        assert!(len <= self.size);
        // SAFETY: the region is mapped readable for its whole lifetime.
        unsafe { std::slice::from_raw_parts(self.ptr, len) }
    }
}

impl Drop for ExecPage {
    fn drop(&mut self) {
        if !self.ptr.is_null() {
            unsafe {
                libc::munmap(self.ptr as *mut libc::c_void, self.size);
            }
        }
    }
}

fn page_size() -> usize {
    // SAFETY: sysconf is always safe to call.
    unsafe { libc::sysconf(libc::_SC_PAGESIZE) as usize }
}
