/// The value every reported expression must evaluate to by default
pub const DEFAULT_TARGET: i64 = 10;
