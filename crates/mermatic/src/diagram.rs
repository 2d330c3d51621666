//! The generic diagram engine.
//!
//! Every concrete builder is an instantiation of [`Diagram`] with a
//! [`DiagramKind`] supplying the keyword line and the item line-format
//! strategy. The engine owns the shared state — title, configuration, mode,
//! and the ordered item sequence — and the terminal [`Diagram::build`]
//! emission.

use log::debug;

use mermatic_core::{DiagramConfig, Mode, frontmatter};

/// Line-format strategy for one diagram kind.
///
/// A kind value carries any kind-level state (chart orientation, axis
/// declarations) and knows how to turn the accumulated item sequence into
/// output lines. Rendering is a single left-to-right pass; any positional
/// state (cursors, indices, indentation) is threaded through that pass.
pub trait DiagramKind {
    /// Item variant appended by this kind's add-operations.
    type Item;

    /// Kind name used in log records.
    const NAME: &'static str;

    /// The keyword line that opens the diagram body.
    fn keyword(&self) -> String;

    /// Renders the item sequence into output lines, in declaration order.
    fn render(&self, items: &[Self::Item], lines: &mut Vec<String>);
}

/// A single-use diagram builder.
///
/// Constructed by one of the factory functions in the crate root, mutated
/// only by its own chainable add-operations, and serialized by
/// [`Diagram::build`]. Items are append-only and their call order is
/// preserved exactly in the output.
///
/// The builder is a plain value accumulator: no interior mutability, no
/// shared state between instances, single-owner use for the lifetime of one
/// construction.
#[derive(Debug)]
pub struct Diagram<K: DiagramKind> {
    kind: K,
    title: Option<String>,
    config: Option<DiagramConfig>,
    mode: Mode,
    items: Vec<K::Item>,
}

impl<K: DiagramKind + Default> Diagram<K> {
    /// Creates a builder with an explicit mode.
    ///
    /// The factory functions in the crate root and in
    /// [`unchecked`](crate::unchecked) are shorthand for this constructor
    /// with the mode pre-bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use mermatic::{Mode, SankeyDiagram};
    ///
    /// let diagram = SankeyDiagram::new(Some("Energy"), None, Mode::Unsafe);
    /// assert_eq!(diagram.mode(), Mode::Unsafe);
    /// ```
    pub fn new(title: Option<&str>, config: Option<DiagramConfig>, mode: Mode) -> Self {
        Self {
            kind: K::default(),
            title: title.map(str::to_owned),
            config,
            mode,
            items: Vec::new(),
        }
    }
}

impl<K: DiagramKind> Diagram<K> {
    /// Returns the construction mode of this builder.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the frontmatter title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub(crate) fn kind_mut(&mut self) -> &mut K {
        &mut self.kind
    }

    pub(crate) fn push(&mut self, item: K::Item) {
        self.items.push(item);
    }

    /// Serializes the accumulated model into diagram text.
    ///
    /// Emits the frontmatter block (when a title is present or the config
    /// differs from its defaults), the keyword line, and one pass over the
    /// item sequence. Lines are joined with exactly one `\n` and the result
    /// carries no trailing terminator. A builder with zero items renders the
    /// keyword line alone.
    ///
    /// `build` does not consume the builder and is idempotent: calling it
    /// twice on an untouched builder yields byte-identical strings.
    pub fn build(&self) -> String {
        debug!(diagram = K::NAME, items = self.items.len(); "Rendering diagram text");

        let mut lines = Vec::with_capacity(self.items.len() + 1);
        lines.push(self.kind.keyword());
        self.kind.render(&self.items, &mut lines);

        let mut out = frontmatter::render(self.title.as_deref(), self.config.as_ref());
        out.push_str(&lines.join("\n"));
        out
    }
}
