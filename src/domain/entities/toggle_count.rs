/// Draft and committed "rows to toggle" count behind the header popover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleCountInput {
    draft: i64,
    committed: i64,
}

impl ToggleCountInput {
    pub fn new(initial: i64) -> Self {
        let initial = initial.max(1);
        Self {
            draft: initial,
            committed: initial,
        }
    }

    pub fn draft(&self) -> i64 {
        self.draft
    }

    pub fn committed(&self) -> i64 {
        self.committed
    }

    /// Non-numeric input becomes 1 instead of an error.
    pub fn set_draft(&mut self, raw: &str) {
        self.draft = parse_leading_int(raw).unwrap_or(1);
    }

    /// Copies the draft into the committed count, clamped to `[1, loaded_rows]`.
    pub fn commit(&mut self, loaded_rows: usize) -> i64 {
        let upper = i64::try_from(loaded_rows).unwrap_or(i64::MAX).max(1);
        self.committed = self.draft.clamp(1, upper);
        self.committed
    }
}

impl Default for ToggleCountInput {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Reads an optional sign and the leading digits, ignoring anything after them.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
