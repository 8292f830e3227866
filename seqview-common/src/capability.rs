/// How a cursor over a sequence is allowed to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Traversal {
    /// Every element can be read once; reading consumes it from the shared source.
    SinglePass,
    /// Cursors can be duplicated and traversed independently.
    Forward,
    /// Forward, and cursors can step backwards.
    Bidirectional,
    /// Bidirectional, and cursors can jump to any offset in constant time.
    RandomAccess,
}

/// Static description of what a sequence supports.
///
/// This is what the view adaptors inspect, once per construction, to pick a
/// representation. It is never consulted per element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capabilities {
    traversal: Traversal,
    sized: bool,
    contiguous: bool,
    const_iterable: bool,
    writable: bool,
    text: bool,
}

impl Capabilities {
    /// An unsized, single-pass source such as a byte stream.
    pub const SINGLE_PASS: Self = Self::new(Traversal::SinglePass);
    /// An unsized, restartable source.
    pub const FORWARD: Self = Self::new(Traversal::Forward);
    /// An unsized source whose cursors can step backwards.
    pub const BIDIRECTIONAL: Self = Self::new(Traversal::Bidirectional);
    /// A sized source with constant-time indexing.
    pub const RANDOM_ACCESS: Self = Self::new(Traversal::RandomAccess).with_size();
    /// A sized source backed by one contiguous buffer.
    pub const CONTIGUOUS: Self = Self::RANDOM_ACCESS.with_contiguous();
    /// Contiguous UTF-8 text.
    pub const TEXT: Self = Self::CONTIGUOUS.with_text();

    /// Creates an unsized, non-contiguous descriptor with the given traversal class.
    pub const fn new(traversal: Traversal) -> Self {
        Self {
            traversal,
            sized: false,
            contiguous: false,
            // Iterating a single-pass source mutates it.
            const_iterable: !matches!(traversal, Traversal::SinglePass),
            writable: false,
            text: false,
        }
    }

    pub const fn with_size(mut self) -> Self {
        self.sized = true;
        self
    }

    pub const fn without_size(mut self) -> Self {
        self.sized = false;
        self
    }

    /// Marks the source as contiguous. Contiguity implies random access.
    pub const fn with_contiguous(mut self) -> Self {
        self.traversal = Traversal::RandomAccess;
        self.contiguous = true;
        self
    }

    /// Marks the source as exclusively borrowed, so a mutable span may be handed out.
    pub const fn writable(mut self) -> Self {
        self.writable = true;
        self
    }

    pub const fn with_text(mut self) -> Self {
        self.text = true;
        self
    }

    /// Restricts the descriptor to plain sequential traversal of unknown length.
    ///
    /// Single-pass sources stay single-pass; everything else becomes forward.
    pub const fn sequential(self) -> Self {
        let traversal = match self.traversal {
            Traversal::SinglePass => Traversal::SinglePass,
            _ => Traversal::Forward,
        };
        Self {
            traversal,
            sized: false,
            contiguous: false,
            const_iterable: self.const_iterable,
            writable: false,
            text: self.text,
        }
    }

    pub const fn traversal(&self) -> Traversal {
        self.traversal
    }

    pub const fn is_sized(&self) -> bool {
        self.sized
    }

    pub const fn is_contiguous(&self) -> bool {
        self.contiguous
    }

    pub const fn is_random_access(&self) -> bool {
        matches!(self.traversal, Traversal::RandomAccess)
    }

    pub const fn is_bidirectional(&self) -> bool {
        matches!(
            self.traversal,
            Traversal::Bidirectional | Traversal::RandomAccess
        )
    }

    /// Returns true if cursors can be duplicated and restarted independently.
    pub const fn is_forward(&self) -> bool {
        !self.is_input_only()
    }

    /// Returns true for single-pass sources.
    pub const fn is_input_only(&self) -> bool {
        matches!(self.traversal, Traversal::SinglePass)
    }

    pub const fn is_const_iterable(&self) -> bool {
        self.const_iterable
    }

    pub const fn is_writable(&self) -> bool {
        self.writable
    }

    pub const fn is_text(&self) -> bool {
        self.text
    }
}

/// The canonical, non-owning representations a view can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    /// Read-only pointer and length.
    ContiguousSpan,
    /// Exclusive pointer and length.
    MutableSpan,
    /// A `[begin, end)` index range over random-access storage.
    IndexRange,
    /// Read-only UTF-8 text.
    StringSlice,
    /// A cursor forwarding every operation to the underlying sequence.
    Generic,
}

impl Representation {
    /// Maps a capability descriptor to the representation it is normalized to.
    pub const fn select(capabilities: Capabilities) -> Self {
        if capabilities.sized && capabilities.contiguous {
            if capabilities.writable {
                Representation::MutableSpan
            } else if capabilities.text {
                Representation::StringSlice
            } else {
                Representation::ContiguousSpan
            }
        } else if capabilities.sized && capabilities.is_random_access() {
            Representation::IndexRange
        } else {
            Representation::Generic
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_pass_descriptor() {
        let caps = Capabilities::SINGLE_PASS;
        assert!(caps.is_input_only());
        assert!(!caps.is_forward());
        assert!(!caps.is_sized());
        assert!(!caps.is_const_iterable());
    }

    #[test]
    fn test_contiguous_implies_random_access() {
        let caps = Capabilities::FORWARD.with_size().with_contiguous();
        assert!(caps.is_random_access());
        assert!(caps.is_bidirectional());
        assert!(caps.is_forward());
        assert_eq!(caps.traversal(), Traversal::RandomAccess);
    }

    #[test]
    fn test_traversal_ordering() {
        assert!(Traversal::SinglePass < Traversal::Forward);
        assert!(Traversal::Forward < Traversal::Bidirectional);
        assert!(Traversal::Bidirectional < Traversal::RandomAccess);
    }

    #[test]
    fn test_sequential_drops_size_and_contiguity() {
        let caps = Capabilities::TEXT.sequential();
        assert_eq!(caps.traversal(), Traversal::Forward);
        assert!(!caps.is_sized());
        assert!(!caps.is_contiguous());
        assert!(caps.is_text());

        assert_eq!(
            Capabilities::SINGLE_PASS.sequential(),
            Capabilities::SINGLE_PASS
        );
    }

    #[test]
    fn test_select_representation() {
        assert_eq!(
            Representation::select(Capabilities::CONTIGUOUS),
            Representation::ContiguousSpan
        );
        assert_eq!(
            Representation::select(Capabilities::CONTIGUOUS.writable()),
            Representation::MutableSpan
        );
        assert_eq!(
            Representation::select(Capabilities::TEXT),
            Representation::StringSlice
        );
        assert_eq!(
            Representation::select(Capabilities::RANDOM_ACCESS),
            Representation::IndexRange
        );
        assert_eq!(
            Representation::select(Capabilities::RANDOM_ACCESS.without_size()),
            Representation::Generic
        );
        assert_eq!(
            Representation::select(Capabilities::FORWARD.with_size()),
            Representation::Generic
        );
        assert_eq!(
            Representation::select(Capabilities::SINGLE_PASS),
            Representation::Generic
        );
    }
}
