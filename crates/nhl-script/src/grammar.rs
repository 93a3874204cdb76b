//! Token grammar of the placement script language.
//!
//! ```text
//! context  := '@' dec ',' dec [',' dec [',' dec [',' dec]]] [',' hex] [',' settings]
//! settings := [a-z,]+
//! item     := hex ['|' dec] ['*' dec]
//! variant  := digit '_' digit | 'NA'
//! command  := <empty>
//!           | context | item               (one token)
//!           | variant item                 (two tokens)
//!           | ... (variant | dec) item tail (three or more tokens)
//! ```
//!
//! Tokens are matched from their start: a token is accepted when a prefix
//! of it matches, and the rest is ignored.

use std::str::FromStr;

use crate::context::{ContextModes, PlacementContext};
use crate::error::ScriptError;

/// One classified script command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    /// Blank line.
    Empty,
    /// Replace the placement context.
    Context(PlacementContext),
    /// Place an item with the current context.
    Item(ItemSpec<'a>),
    /// Push a variant, then place an item.
    VariantItem {
        variant: VariantToken,
        item: ItemSpec<'a>,
    },
}

/// Parsed `id[|stack][*count]` token. The id digits are kept as text since
/// their radix depends on the context they are compiled under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSpec<'a> {
    pub token: &'a str,
    pub id_digits: &'a str,
    pub stack: u32,
    pub count: u32,
}

impl ItemSpec<'_> {
    /// Resolve the item id, reading the digits as hex or decimal.
    /// None if the digits do not fit the radix or overflow.
    pub fn item_id(&self, hex: bool) -> Option<u64> {
        if hex {
            u64::from_str_radix(self.id_digits, 16).ok()
        } else {
            decimal(self.id_digits)
        }
    }
}

/// The variant slot of a multi-token command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantToken {
    /// `variant_texture`, one digit each.
    Variant { variant: u8, texture: u8 },
    /// `NA`: no variant.
    Placeholder,
    /// Bare number in the variant slot of a long command: no variant.
    Plain,
}

/// Classify the tokens of one script line.
pub fn parse_command<S: AsRef<str>>(tokens: &[S]) -> Result<Command<'_>, ScriptError> {
    match tokens {
        [] => Ok(Command::Empty),
        [single] => {
            let token = single.as_ref();
            if token.starts_with('@') {
                parse_context(token)
                    .map(Command::Context)
                    .ok_or_else(|| ScriptError::InvalidContext(token.to_string()))
            } else {
                parse_item(token)
                    .map(Command::Item)
                    .ok_or_else(|| ScriptError::InvalidItem(token.to_string()))
            }
        }
        [variant, item] => match (parse_variant(variant.as_ref()), parse_item(item.as_ref())) {
            (Some(variant), Some(item)) => Ok(Command::VariantItem { variant, item }),
            _ => Err(ScriptError::InvalidVariantOrItem(join(tokens))),
        },
        [.., variant, item, _] => {
            let variant = variant.as_ref();
            let variant = parse_variant(variant)
                .or_else(|| is_decimal(variant).then_some(VariantToken::Plain))
                .ok_or_else(|| ScriptError::InvalidVariantId(variant.to_string()))?;
            let item = item.as_ref();
            let item = parse_item(item).ok_or_else(|| ScriptError::InvalidItem(item.to_string()))?;
            Ok(Command::VariantItem { variant, item })
        }
    }
}

/// Parse an `@x,y[,width[,height[,offset]]][,flag0][,settings]` token.
///
/// Each optional field is taken only when its separator is followed by at
/// least one character of its class, so `@0,0,diy` reads `d` as flag0 while
/// `@0,0,hex` reads `hex` as settings.
pub fn parse_context(token: &str) -> Option<PlacementContext> {
    let mut scan = Scanner::new(token.strip_prefix('@')?);
    let x = decimal(scan.run(is_digit)?)?;
    let y = decimal(scan.field(b',', is_digit)?)?;

    // width, height, offset
    let mut numbers = [None; 3];
    for slot in &mut numbers {
        match scan.field(b',', is_digit) {
            Some(digits) => *slot = Some(decimal::<u32>(digits)?),
            None => break,
        }
    }

    let flag0 = match scan.field(b',', is_hex_digit) {
        Some(digits) => u16::from_str_radix(digits, 16).ok()?,
        None => 0,
    };
    let settings = scan
        .field(b',', |b| b.is_ascii_lowercase() || b == b',')
        .unwrap_or_default();

    let mut context = PlacementContext::at(x, y);
    if let Some(width) = numbers[0] {
        context = context.with_width(width);
    }
    context.height = numbers[1].unwrap_or(0);
    context.offset = numbers[2].unwrap_or(0);
    context.flag0 = flag0;
    context.modes = ContextModes::from_names(settings.split(','));
    Some(context)
}

/// Parse an `id[|stack][*count]` token. Text after the longest match is
/// ignored, so `5x` is item 5.
pub fn parse_item(token: &str) -> Option<ItemSpec<'_>> {
    let mut scan = Scanner::new(token);
    let id_digits = scan.run(is_hex_digit)?;
    let stack = match scan.field(b'|', is_digit) {
        Some(digits) => decimal(digits)?,
        None => 1,
    };
    let count = match scan.field(b'*', is_digit) {
        Some(digits) => decimal(digits)?,
        None => 1,
    };
    Some(ItemSpec {
        token,
        id_digits,
        stack,
        count,
    })
}

/// Parse a `variant_texture` or `NA` token from the start of `token`.
pub fn parse_variant(token: &str) -> Option<VariantToken> {
    match token.as_bytes() {
        [v, b'_', t, ..] if v.is_ascii_digit() && t.is_ascii_digit() => Some(VariantToken::Variant {
            variant: v - b'0',
            texture: t - b'0',
        }),
        [b'N', b'A', ..] => Some(VariantToken::Placeholder),
        _ => None,
    }
}

/// Cursor over the unread tail of a token.
struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self { rest: text }
    }

    /// Consume the longest non-empty run of ASCII bytes accepted by `class`.
    fn run(&mut self, class: impl Fn(u8) -> bool) -> Option<&'a str> {
        let len = self
            .rest
            .bytes()
            .take_while(|&b| b.is_ascii() && class(b))
            .count();
        if len == 0 {
            return None;
        }
        let (run, rest) = self.rest.split_at(len);
        self.rest = rest;
        Some(run)
    }

    /// Consume `separator` plus a run of `class`, or nothing.
    fn field(&mut self, separator: u8, class: impl Fn(u8) -> bool) -> Option<&'a str> {
        let mut ahead = Scanner::new(self.rest.strip_prefix(separator as char)?);
        let run = ahead.run(class)?;
        *self = ahead;
        Some(run)
    }
}

fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Strict unsigned decimal: digits only, no sign.
fn decimal<T: FromStr>(s: &str) -> Option<T> {
    if !is_decimal(s) {
        return None;
    }
    s.parse().ok()
}

fn join<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|t| t.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::UVec2;

    #[test]
    fn test_context_full_form() {
        let ctx = parse_context("@2,2,8,0,0,a,diy,hex").expect("should parse");
        assert_eq!(ctx.anchor, UVec2::new(2, 2));
        assert_eq!(ctx.width, 8);
        assert_eq!(ctx.height, 0);
        assert_eq!(ctx.offset, 0);
        assert_eq!(ctx.flag0, 0xA);
        assert!(ctx.modes.diy);
        assert!(ctx.modes.hex);
        assert!(!ctx.modes.variants);
        assert!(!ctx.modes.fossil);
    }

    #[test]
    fn test_context_defaults() {
        let ctx = parse_context("@4,6").expect("should parse");
        assert_eq!(ctx, PlacementContext::at(4, 6));
        assert_eq!(ctx.width, 16);

        let ctx = parse_context("@0,0,16").expect("should parse");
        assert_eq!(ctx, PlacementContext::default());
    }

    #[test]
    fn test_context_partial_numbers() {
        let ctx = parse_context("@0,0,4,9").expect("should parse");
        assert_eq!(ctx.width, 4);
        assert_eq!(ctx.height, 9);
        assert_eq!(ctx.offset, 0);

        let ctx = parse_context("@0,0,4,9,3").expect("should parse");
        assert_eq!(ctx.offset, 3);
    }

    #[test]
    fn test_context_zero_width_clamped() {
        let ctx = parse_context("@0,0,0").expect("should parse");
        assert_eq!(ctx.width, 1);
    }

    #[test]
    fn test_context_leading_hex_field_is_flag() {
        // A settings word starting with hex letters loses them to flag0
        let ctx = parse_context("@0,0,16,0,0,diy").expect("should parse");
        assert_eq!(ctx.flag0, 0xD);
        assert!(!ctx.modes.diy);

        let ctx = parse_context("@0,0,16,fossil").expect("should parse");
        assert_eq!(ctx.width, 16);
        assert_eq!(ctx.flag0, 0xF);
        assert!(!ctx.modes.fossil);

        let ctx = parse_context("@0,0,diy").expect("should parse");
        assert_eq!(ctx.flag0, 0xD);
        assert_eq!(ctx.modes, ContextModes::default());
    }

    #[test]
    fn test_context_settings_after_flag() {
        let ctx = parse_context("@0,0,16,0,0,0,variants,fossil").expect("should parse");
        assert!(ctx.modes.variants && ctx.modes.fossil);
        assert_eq!(ctx.flag0, 0);
    }

    #[test]
    fn test_context_non_hex_settings_without_flag() {
        let ctx = parse_context("@0,0,hex").expect("should parse");
        assert!(ctx.modes.hex);
        assert_eq!(ctx.flag0, 0);

        let ctx = parse_context("@0,0,16,0,0,variants").expect("should parse");
        assert!(ctx.modes.variants);
        assert_eq!(ctx.flag0, 0);
    }

    #[test]
    fn test_context_hex_word_is_flag() {
        let ctx = parse_context("@0,0,16,0,0,dad").expect("should parse");
        assert_eq!(ctx.flag0, 0xDAD);
        assert!(!ctx.modes.diy);

        let ctx = parse_context("@0,0,16,0,0,1F").expect("should parse");
        assert_eq!(ctx.flag0, 0x1F);
    }

    #[test]
    fn test_context_flag_after_three_numbers() {
        // Fourth decimal field is read as hex flag0
        let ctx = parse_context("@0,0,1,2,3,10").expect("should parse");
        assert_eq!(ctx.flag0, 0x10);
    }

    #[test]
    fn test_context_unknown_setting_ignored() {
        let ctx = parse_context("@0,0,hex,wat").expect("should parse");
        assert!(ctx.modes.hex);
        assert!(!ctx.modes.diy);
    }

    #[test]
    fn test_context_trailing_text_ignored() {
        let ctx = parse_context("@1,2x").expect("should parse");
        assert_eq!(ctx, PlacementContext::at(1, 2));

        let ctx = parse_context("@2,4,").expect("should parse");
        assert_eq!(ctx, PlacementContext::at(2, 4));

        let ctx = parse_context("@0,0,4,1,2,3,7").expect("should parse");
        assert_eq!((ctx.width, ctx.offset, ctx.flag0), (4, 2, 3));
        assert_eq!(ctx.modes, ContextModes::default());

        let ctx = parse_context("@0,0,DIY").expect("should parse");
        assert_eq!(ctx.flag0, 0xD);
    }

    #[test]
    fn test_context_rejects_malformed() {
        for token in [
            "@abc",
            "@",
            "@1",
            "@1,",
            "@-1,2",
            "@1,x",
            "@99999999999,0",
            "@1,2,3,4,5,10000",
            "1,2",
        ] {
            assert!(parse_context(token).is_none(), "{token} should not parse");
        }
    }

    #[test]
    fn test_item_forms() {
        let item = parse_item("1").expect("plain");
        assert_eq!((item.id_digits, item.stack, item.count), ("1", 1, 1));

        let item = parse_item("16a|5*1").expect("full");
        assert_eq!((item.id_digits, item.stack, item.count), ("16a", 5, 1));

        let item = parse_item("300*12").expect("count only");
        assert_eq!((item.stack, item.count), (1, 12));

        let item = parse_item("300|0").expect("zero stack");
        assert_eq!(item.stack, 0);
    }

    #[test]
    fn test_item_trailing_text_ignored() {
        let item = parse_item("5x").expect("leading id");
        assert_eq!((item.id_digits, item.stack, item.count), ("5", 1, 1));
        assert_eq!(item.token, "5x");

        let item = parse_item("1|x").expect("stack needs digits");
        assert_eq!((item.id_digits, item.stack, item.count), ("1", 1, 1));

        let item = parse_item("1*2|3").expect("count ends the match");
        assert_eq!((item.stack, item.count), (1, 2));
    }

    #[test]
    fn test_item_rejects_malformed() {
        for token in ["zz", "", "|3", "*2", "-5", "g1", "1|99999999999"] {
            assert!(parse_item(token).is_none(), "{token:?} should not parse");
        }
        let wide = parse_item("99999999999999999999").expect("hex run");
        assert_eq!(wide.item_id(true), None);
    }

    #[test]
    fn test_item_id_radix() {
        let item = parse_item("16a").expect("hex digits");
        assert_eq!(item.item_id(true), Some(0x16A));
        assert_eq!(item.item_id(false), None);

        let item = parse_item("100").expect("digits");
        assert_eq!(item.item_id(false), Some(100));
        assert_eq!(item.item_id(true), Some(0x100));
    }

    #[test]
    fn test_variant_tokens() {
        assert_eq!(
            parse_variant("3_7"),
            Some(VariantToken::Variant {
                variant: 3,
                texture: 7
            })
        );
        assert_eq!(parse_variant("NA"), Some(VariantToken::Placeholder));
        assert_eq!(
            parse_variant("1_2x"),
            Some(VariantToken::Variant {
                variant: 1,
                texture: 2
            })
        );
        assert_eq!(parse_variant("NAME"), Some(VariantToken::Placeholder));
        for token in ["12_3", "1_", "a_b", "na", "1-2", "7"] {
            assert!(parse_variant(token).is_none(), "{token} should not parse");
        }
    }

    #[test]
    fn test_command_classification() {
        assert_eq!(parse_command::<&str>(&[]).expect("empty"), Command::Empty);
        assert!(matches!(
            parse_command(&["@0,0"]).expect("context"),
            Command::Context(_)
        ));
        assert!(matches!(
            parse_command(&["5*2"]).expect("item"),
            Command::Item(ItemSpec { count: 2, .. })
        ));
        assert!(matches!(
            parse_command(&["1_2", "5"]).expect("variant item"),
            Command::VariantItem {
                variant: VariantToken::Variant { variant: 1, texture: 2 },
                ..
            }
        ));
    }

    #[test]
    fn test_long_command_uses_trailing_slots() {
        let tokens = ["ignored", "more", "NA", "1a2", "Name"];
        let command = parse_command(&tokens).expect("long form");
        match command {
            Command::VariantItem { variant, item } => {
                assert_eq!(variant, VariantToken::Placeholder);
                assert_eq!(item.id_digits, "1a2");
            }
            other => panic!("expected VariantItem, got {:?}", other),
        }

        let command = parse_command(&["42", "7", "Chair"]).expect("bare number in variant slot");
        assert!(matches!(
            command,
            Command::VariantItem {
                variant: VariantToken::Plain,
                ..
            }
        ));
    }

    #[test]
    fn test_command_errors() {
        assert!(matches!(
            parse_command(&["zz"]),
            Err(ScriptError::InvalidItem(t)) if t == "zz"
        ));
        assert!(matches!(
            parse_command(&["@abc"]),
            Err(ScriptError::InvalidContext(t)) if t == "@abc"
        ));
        assert!(matches!(
            parse_command(&["1_2", "zz"]),
            Err(ScriptError::InvalidVariantOrItem(t)) if t == "1_2 zz"
        ));
        assert!(matches!(
            parse_command(&["xx", "5"]),
            Err(ScriptError::InvalidVariantOrItem(_))
        ));
        assert!(matches!(
            parse_command(&["x_y", "5", "Name"]),
            Err(ScriptError::InvalidVariantId(t)) if t == "x_y"
        ));
        assert!(matches!(
            parse_command(&["NA", "zz", "Name"]),
            Err(ScriptError::InvalidItem(t)) if t == "zz"
        ));
    }
}
