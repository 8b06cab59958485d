//! Token-kind constants.
//!
//! Kinds occupy ids `0..NUM_TOKENS` of the grammar symbol space; the
//! dialect's non-terminal ids start at [`NUM_TOKENS`]. The lexer only
//! ever emits these kinds.

/// A token kind; the terminal half of the grammar symbol id space.
pub type TokenKind = usize;

/// Lexical error; carries a diagnostic message instead of aborting.
pub const ERR: TokenKind = 0;
/// Program start marker `HAI`.
pub const HAI: TokenKind = 1;
/// Program end marker `KTHXBYE`.
pub const KTHXBYE: TokenKind = 2;
/// Any literal value (`WIN`, `NOOB`, numbers, quoted strings).
pub const LITERAL: TokenKind = 3;
/// Identifier.
pub const IDENT: TokenKind = 4;
/// Logical end of statement.
pub const EOL: TokenKind = 5;
/// Declaration `I HAS A`.
pub const I_HAS_A: TokenKind = 6;
/// Declaration initializer `ITZ`.
pub const ITZ: TokenKind = 7;
/// Assignment `R`.
pub const R: TokenKind = 8;
/// Cast expression `MAEK`.
pub const MAEK: TokenKind = 9;
/// In-place cast `IS NOW`.
pub const IS_NOW: TokenKind = 10;
/// Cast target `A NOOB`.
pub const A_NOOB: TokenKind = 11;
/// Cast target `A TROOF`.
pub const A_TROOF: TokenKind = 12;
/// Cast target `A NUMBR`.
pub const A_NUMBR: TokenKind = 13;
/// Cast target `A NUMBAR`.
pub const A_NUMBAR: TokenKind = 14;
/// Cast target `A YARN`.
pub const A_YARN: TokenKind = 15;
/// Reserved call marker `I IZ` (no grammar rule; kept out of the
/// identifier space).
pub const I_IZ: TokenKind = 16;
/// Equality `BOTH SAEM`.
pub const BOTH_SAEM: TokenKind = 17;
/// Inequality `DIFFRINT`.
pub const DIFFRINT: TokenKind = 18;
/// Maximum `BIGGR OF`.
pub const BIGGR_OF: TokenKind = 19;
/// Minimum `SMALLR OF`.
pub const SMALLR_OF: TokenKind = 20;
/// Addition `SUM OF`.
pub const SUM_OF: TokenKind = 21;
/// Subtraction `DIFF OF`.
pub const DIFF_OF: TokenKind = 22;
/// Multiplication `PRODUKT OF`.
pub const PRODUKT_OF: TokenKind = 23;
/// Division `QUOSHUNT OF`.
pub const QUOSHUNT_OF: TokenKind = 24;
/// Modulo `MOD OF`.
pub const MOD_OF: TokenKind = 25;
/// Boolean negation `NOT`.
pub const NOT: TokenKind = 26;
/// Conjunction `BOTH OF`.
pub const BOTH_OF: TokenKind = 27;
/// Disjunction `EITHER OF`.
pub const EITHER_OF: TokenKind = 28;
/// Exclusive or `WON OF`.
pub const WON_OF: TokenKind = 29;
/// List disjunction `ANY OF`.
pub const ANY_OF: TokenKind = 30;
/// List conjunction `ALL OF`.
pub const ALL_OF: TokenKind = 31;
/// String concatenation `SMOOSH`.
pub const SMOOSH: TokenKind = 32;
/// List separator `AN`.
pub const AN: TokenKind = 33;
/// List terminator `MKAY`.
pub const MKAY: TokenKind = 34;

/// One past the highest token kind; the first non-terminal id.
pub const NUM_TOKENS: usize = 35;
