/// Per-request behavior flags mapped to rqlite query-string arguments.
///
/// Flags compose freely in memory; on the wire `queue` is exclusive with
/// the other two and wins when combined (queued writes cannot carry
/// transaction or timing arguments).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DbFlags {
    /// Ask the server to report per-statement timing information.
    pub timings: bool,
    /// Wrap all statements of the request in a single transaction.
    pub transaction: bool,
    /// Queue the write and acknowledge before it is committed.
    pub queue: bool,
}

impl DbFlags {
    /// No flags; renders to an empty query string.
    pub const NONE: Self = Self {
        timings: false,
        transaction: false,
        queue: false,
    };

    /// Returns a copy with `timings` set.
    pub fn with_timings(mut self) -> Self {
        self.timings = true;
        self
    }

    /// Returns a copy with `transaction` set.
    pub fn with_transaction(mut self) -> Self {
        self.transaction = true;
        self
    }

    /// Returns a copy with `queue` set.
    pub fn with_queue(mut self) -> Self {
        self.queue = true;
        self
    }

    // Queue wins: a queued request drops transaction and timing arguments.
    fn normalize(self) -> Self {
        if self.queue {
            Self::NONE.with_queue()
        } else {
            self
        }
    }

    /// Renders the flag set as a query-string suffix.
    ///
    /// The suffix starts with `?` when any flag is set (`?queue`,
    /// `?timings&transaction`, ...) and is empty otherwise. Emission order
    /// is fixed so rendered paths are stable across calls.
    pub fn to_query_string(self) -> String {
        let normalized = self.normalize();
        let mut out = String::new();
        if normalized.queue {
            out.push_str("&queue");
        }
        if normalized.timings {
            out.push_str("&timings");
        }
        if normalized.transaction {
            out.push_str("&transaction");
        }
        if !out.is_empty() {
            out.replace_range(..1, "?");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::DbFlags;

    #[test]
    fn none_renders_empty() {
        assert_eq!(DbFlags::NONE.to_query_string(), "");
        assert_eq!(DbFlags::default().to_query_string(), "");
    }

    #[test]
    fn single_flags_render_with_question_mark() {
        assert_eq!(DbFlags::NONE.with_timings().to_query_string(), "?timings");
        assert_eq!(
            DbFlags::NONE.with_transaction().to_query_string(),
            "?transaction"
        );
        assert_eq!(DbFlags::NONE.with_queue().to_query_string(), "?queue");
    }

    #[test]
    fn timings_and_transaction_render_in_fixed_order() {
        let flags = DbFlags::NONE.with_transaction().with_timings();
        assert_eq!(flags.to_query_string(), "?timings&transaction");
    }

    #[test]
    fn queue_suppresses_other_flags() {
        let flags = DbFlags::NONE.with_queue().with_timings().with_transaction();
        assert_eq!(flags.to_query_string(), "?queue");
    }

    #[test]
    fn render_is_idempotent() {
        let flags = DbFlags::NONE.with_timings().with_transaction();
        assert_eq!(flags.to_query_string(), flags.to_query_string());
    }
}
