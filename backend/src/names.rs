use std::collections::HashMap;

/// A named code location (label or procedure) together with the patch
/// sites that referenced it before it was defined.
///
/// Branches and calls may reference a name before it is placed; each
/// such site records the offset of its 32-bit displacement placeholder
/// and is back-patched when the definition arrives.
#[derive(Debug, Default)]
struct NameDef {
    /// Resolved code offset, once defined.
    value: Option<usize>,
    /// Placeholder offsets awaiting resolution.
    uses: Vec<usize>,
}

/// Name → definition map used for both labels and procedures.
#[derive(Debug, Default)]
pub(crate) struct NameTable {
    entries: HashMap<String, NameDef>,
}

impl NameTable {
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Record a definition at `offset`. Returns the drained pending
    /// patch sites, or `Err(())` if the name was already defined.
    pub fn define(&mut self, name: &str, offset: usize) -> Result<Vec<usize>, ()> {
        let def = self.entries.entry(name.to_string()).or_default();
        if def.value.is_some() {
            return Err(());
        }
        def.value = Some(offset);
        Ok(std::mem::take(&mut def.uses))
    }

    /// Record a reference from the placeholder at `site`. Returns the
    /// target offset if the name is already defined (backward
    /// reference); otherwise the site is queued for back-patching.
    pub fn reference(&mut self, name: &str, site: usize) -> Option<usize> {
        let def = self.entries.entry(name.to_string()).or_default();
        match def.value {
            Some(target) => Some(target),
            None => {
                def.uses.push(site);
                None
            }
        }
    }

    /// Name of some entry that was referenced but never defined.
    pub fn first_unresolved(&self) -> Option<String> {
        self.entries
            .iter()
            .find(|(_, def)| def.value.is_none() && !def.uses.is_empty())
            .map(|(name, _)| name.clone())
    }
}
