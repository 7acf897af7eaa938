//! Lexical scopes of the identify pass.
//!
//! Frames live in an arena and point at their parent by index. Entering a
//! scope allocates a frame whose parent is the current one; leaving it is
//! just going back to the parent's id, so an error unwinding through the
//! walk leaves nothing to clean up.

use fxhash::FxHashMap;

/// Index of a frame in a `ScopeStack`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(u32);

#[derive(Debug, Default)]
struct Frame {
    parent: Option<FrameId>,
    /// Source name to fresh name.
    bindings: FxHashMap<String, String>,
    /// Using-directive prefixes, in the order they were added.
    usings: Vec<Vec<String>>,
}

/// Local bindings and using-directives of one identify run.
///
/// Also owns the fresh-name counter, so generated names are unique across
/// the whole unit.
#[derive(Debug)]
pub struct ScopeStack {
    frames: Vec<Frame>,
    fresh_prefix: String,
    counter: usize,
}

impl ScopeStack {
    /// A stack holding only the root frame.
    pub fn new(fresh_prefix: impl Into<String>) -> Self {
        Self {
            frames: vec![Frame::default()],
            fresh_prefix: fresh_prefix.into(),
            counter: 0,
        }
    }

    pub fn root(&self) -> FrameId {
        FrameId(0)
    }

    /// Opens a frame nested in `parent`.
    pub fn push(&mut self, parent: FrameId) -> FrameId {
        let id = FrameId(self.frames.len() as u32);
        self.frames.push(Frame {
            parent: Some(parent),
            ..Frame::default()
        });
        id
    }

    /// The frame that is current again once `frame` is left.
    pub fn pop(&self, frame: FrameId) -> Option<FrameId> {
        self.frames[frame.0 as usize].parent
    }

    /// Binds `local` in `frame` to a name never handed out before.
    ///
    /// A second binding of the same source name in one frame shadows the
    /// first from here on.
    pub fn bind(&mut self, frame: FrameId, local: &str) -> String {
        let fresh = format!("{}{}", self.fresh_prefix, self.counter);
        self.counter += 1;
        log::trace!("Bound `{}` to `{}`", local, fresh);
        self.frames[frame.0 as usize]
            .bindings
            .insert(local.to_string(), fresh.clone());
        fresh
    }

    /// Innermost binding of `name` visible from `frame`.
    pub fn lookup_local(&self, frame: FrameId, name: &str) -> Option<&str> {
        self.chain(frame)
            .find_map(|f| f.bindings.get(name))
            .map(String::as_str)
    }

    pub fn add_using(&mut self, frame: FrameId, prefix: Vec<String>) {
        self.frames[frame.0 as usize].usings.push(prefix);
    }

    /// Every using prefix active in `frame`: innermost frame first, and
    /// within a frame the latest directive first.
    pub fn search_prefixes(&self, frame: FrameId) -> Vec<&[String]> {
        self.chain(frame)
            .flat_map(|f| f.usings.iter().rev().map(Vec::as_slice))
            .collect()
    }

    /// Number of frames from `frame` up to and including the root.
    pub fn depth(&self, frame: FrameId) -> usize {
        self.chain(frame).count()
    }

    /// How many fresh names have been generated so far.
    pub fn fresh_count(&self) -> usize {
        self.counter
    }

    fn chain(&self, frame: FrameId) -> impl Iterator<Item = &Frame> + '_ {
        let mut next = Some(frame);
        std::iter::from_fn(move || {
            let id = next?;
            let current = &self.frames[id.0 as usize];
            next = current.parent;
            Some(current)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segs(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_fresh_names_are_distinct() {
        let mut scopes = ScopeStack::new("V_");
        let root = scopes.root();
        let inner = scopes.push(root);
        assert_eq!(scopes.bind(inner, "X"), "V_0");
        assert_eq!(scopes.bind(inner, "X"), "V_1");
        assert_eq!(scopes.bind(root, "X"), "V_2");
        assert_eq!(scopes.fresh_count(), 3);
    }

    #[test]
    fn test_lookup_innermost_first() {
        let mut scopes = ScopeStack::new("V_");
        let outer = scopes.push(scopes.root());
        let x_outer = scopes.bind(outer, "X");
        let inner = scopes.push(outer);
        let x_inner = scopes.bind(inner, "X");

        assert_eq!(scopes.lookup_local(inner, "X"), Some(x_inner.as_str()));
        // leaving the inner frame restores the outer binding
        let back = scopes.pop(inner).unwrap();
        assert_eq!(back, outer);
        assert_eq!(scopes.lookup_local(back, "X"), Some(x_outer.as_str()));
    }

    #[test]
    fn test_siblings_do_not_see_each_other() {
        let mut scopes = ScopeStack::new("V_");
        let root = scopes.root();
        let left = scopes.push(root);
        scopes.bind(left, "Y");
        let right = scopes.push(root);
        assert_eq!(scopes.lookup_local(right, "Y"), None);
        assert_eq!(scopes.lookup_local(root, "Y"), None);
    }

    #[test]
    fn test_search_prefix_order() {
        let mut scopes = ScopeStack::new("V_");
        let root = scopes.root();
        scopes.add_using(root, segs(&["System"]));
        let ns = scopes.push(root);
        scopes.add_using(ns, segs(&["N"]));
        scopes.add_using(ns, segs(&["M"]));

        let found: Vec<Vec<String>> = scopes
            .search_prefixes(ns)
            .into_iter()
            .map(|prefix| prefix.to_vec())
            .collect();
        assert_eq!(found, vec![segs(&["M"]), segs(&["N"]), segs(&["System"])]);
        assert_eq!(scopes.search_prefixes(root).len(), 1);
        assert_eq!(scopes.depth(ns), 2);
        assert_eq!(scopes.pop(root), None);
    }
}
