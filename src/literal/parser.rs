//! Literal parser
//!
//! Evaluates the text of an INI value as a literal expression: numbers,
//! strings, bytes, booleans, `None` and list/tuple/set/dict displays. Names,
//! calls and operators other than a numeric sign are rejected, so evaluating a
//! value never runs code.

use crate::error::LiteralError;
use crate::literal::value::Literal;

/// Deepest container nesting accepted in one value
pub const MAX_DEPTH: usize = 200;

/// Parse a complete value
pub fn parse_literal(input: &str) -> Result<Literal, LiteralError> {
    let mut parser = Parser::new(input);
    parser.skip_ws();
    if parser.at_end() {
        return Err(LiteralError::Empty);
    }

    let first = parser.value()?;
    parser.skip_ws();

    // A bare `1, 2` at top level is a tuple
    let result = if parser.peek() == Some(',') {
        let mut items = vec![first];
        while parser.eat(',') {
            parser.skip_ws();
            if parser.at_end() {
                break;
            }
            items.push(parser.value()?);
            parser.skip_ws();
        }
        Literal::Tuple(items)
    } else {
        first
    };

    parser.skip_ws();
    if !parser.at_end() {
        return Err(LiteralError::TrailingInput { pos: parser.pos });
    }
    Ok(result)
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
    depth: usize,
}

/// Prefix flags of a string literal
#[derive(Clone, Copy, Default)]
struct StrPrefix {
    raw: bool,
    bytes: bool,
}

enum StrPart {
    Text(String),
    Bytes(Vec<u8>),
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0, depth: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), LiteralError> {
        match self.peek() {
            Some(c) if c == expected => {
                self.pos += c.len_utf8();
                Ok(())
            }
            Some(found) => Err(LiteralError::UnexpectedChar {
                pos: self.pos,
                found,
            }),
            None => Err(LiteralError::UnexpectedEnd),
        }
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.pos += c.len_utf8();
            } else if c == '\\' && self.peek_nth(1) == Some('\n') {
                self.pos += 2;
            } else {
                break;
            }
        }
    }

    fn value(&mut self) -> Result<Literal, LiteralError> {
        self.skip_ws();
        match self.peek() {
            None => Err(LiteralError::UnexpectedEnd),
            Some('+') | Some('-') => self.signed_number(),
            Some('[' | '(' | '{') => self.nested(),
            Some('\'') | Some('"') => self.strings(),
            Some(c) if c.is_ascii_digit() => self.number(false),
            Some('.') if self.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) => {
                self.number(false)
            }
            Some(c) if c.is_alphabetic() || c == '_' => self.name(),
            Some(found) => Err(LiteralError::UnexpectedChar {
                pos: self.pos,
                found,
            }),
        }
    }

    /// A container display, bounded by [`MAX_DEPTH`]
    fn nested(&mut self) -> Result<Literal, LiteralError> {
        if self.depth >= MAX_DEPTH {
            return Err(LiteralError::TooDeep { pos: self.pos });
        }
        self.depth += 1;
        let result = match self.peek() {
            Some('[') => {
                self.bump();
                self.sequence(']').map(Literal::List)
            }
            Some('(') => self.paren(),
            _ => self.brace(),
        };
        self.depth -= 1;
        result
    }

    fn signed_number(&mut self) -> Result<Literal, LiteralError> {
        let negative = self.bump() == Some('-');
        self.skip_ws();
        match self.peek() {
            Some(c) if c.is_ascii_digit() || c == '.' => self.number(negative),
            Some(found) => Err(LiteralError::UnexpectedChar {
                pos: self.pos,
                found,
            }),
            None => Err(LiteralError::UnexpectedEnd),
        }
    }

    /// Comma separated values up to `close`, trailing comma allowed
    fn sequence(&mut self, close: char) -> Result<Vec<Literal>, LiteralError> {
        let mut items = Vec::new();
        loop {
            self.skip_ws();
            if self.eat(close) {
                return Ok(items);
            }
            items.push(self.value()?);
            self.skip_ws();
            if !self.eat(',') {
                self.skip_ws();
                self.expect(close)?;
                return Ok(items);
            }
        }
    }

    fn paren(&mut self) -> Result<Literal, LiteralError> {
        self.expect('(')?;
        self.skip_ws();
        if self.eat(')') {
            return Ok(Literal::Tuple(Vec::new()));
        }

        let first = self.value()?;
        self.skip_ws();
        if self.eat(')') {
            // Parentheses around a single value only group it
            return Ok(first);
        }

        self.expect(',')?;
        let mut items = vec![first];
        items.extend(self.sequence(')')?);
        Ok(Literal::Tuple(items))
    }

    fn brace(&mut self) -> Result<Literal, LiteralError> {
        self.expect('{')?;
        self.skip_ws();
        if self.eat('}') {
            return Ok(Literal::Dict(Vec::new()));
        }

        let first = self.value()?;
        self.skip_ws();
        if self.eat(':') {
            let value = self.value()?;
            let mut pairs = Vec::new();
            insert_pair(&mut pairs, first, value)?;
            loop {
                self.skip_ws();
                if self.eat('}') {
                    return Ok(Literal::Dict(pairs));
                }
                self.expect(',')?;
                self.skip_ws();
                if self.eat('}') {
                    return Ok(Literal::Dict(pairs));
                }
                let key = self.value()?;
                self.skip_ws();
                self.expect(':')?;
                let value = self.value()?;
                insert_pair(&mut pairs, key, value)?;
            }
        }

        let mut members = Vec::new();
        insert_member(&mut members, first)?;
        if self.eat(',') {
            for item in self.sequence('}')? {
                insert_member(&mut members, item)?;
            }
        } else {
            self.expect('}')?;
        }
        Ok(Literal::Set(members))
    }

    fn name(&mut self) -> Result<Literal, LiteralError> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
        let src = self.src;
        let word = &src[start..self.pos];

        if matches!(self.peek(), Some('\'') | Some('"')) && string_prefix(word).is_some() {
            self.pos = start;
            return self.strings();
        }

        match word {
            "None" => Ok(Literal::None),
            "True" => Ok(Literal::Bool(true)),
            "False" => Ok(Literal::Bool(false)),
            "set" => {
                self.skip_ws();
                if self.eat('(') {
                    self.skip_ws();
                    if self.eat(')') {
                        return Ok(Literal::Set(Vec::new()));
                    }
                }
                Err(LiteralError::Unsupported(self.src[start..].trim().to_string()))
            }
            _ => Err(LiteralError::Unsupported(self.src[start..].trim().to_string())),
        }
    }

    fn number(&mut self, negative: bool) -> Result<Literal, LiteralError> {
        let start = self.pos;
        let radix_prefixed = self.rest().len() > 1
            && self.rest().starts_with('0')
            && matches!(self.peek_nth(1), Some('x' | 'X' | 'o' | 'O' | 'b' | 'B'));

        let mut prev = '\0';
        while let Some(c) = self.peek() {
            let exponent_sign =
                (c == '+' || c == '-') && matches!(prev, 'e' | 'E') && !radix_prefixed;
            if c.is_ascii_alphanumeric() || c == '_' || c == '.' || exponent_sign {
                self.pos += 1;
                prev = c;
            } else {
                break;
            }
        }
        let src = self.src;
        let token = &src[start..self.pos];

        if token.ends_with(['j', 'J']) {
            return Err(LiteralError::Unsupported(format!("complex number {}", token)));
        }
        if !underscores_valid(token) {
            return Err(LiteralError::InvalidNumber(token.to_string()));
        }
        let digits: String = token.chars().filter(|c| *c != '_').collect();

        if radix_prefixed {
            let radix = match digits.as_bytes()[1] {
                b'x' | b'X' => 16,
                b'o' | b'O' => 8,
                _ => 2,
            };
            return parse_int(&digits[2..], radix, negative, token);
        }

        if digits.contains(['.', 'e', 'E']) {
            let float_chars = digits
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
            if !float_chars {
                return Err(LiteralError::InvalidNumber(token.to_string()));
            }
            let value: f64 = digits
                .parse()
                .map_err(|_| LiteralError::InvalidNumber(token.to_string()))?;
            return Ok(Literal::Float(if negative { -value } else { value }));
        }

        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(LiteralError::InvalidNumber(token.to_string()));
        }
        if digits.len() > 1 && digits.starts_with('0') && digits.chars().any(|c| c != '0') {
            return Err(LiteralError::InvalidNumber(token.to_string()));
        }
        parse_int(&digits, 10, negative, token)
    }

    /// One or more adjacent string literals, concatenated
    fn strings(&mut self) -> Result<Literal, LiteralError> {
        let start = self.pos;
        let mut text: Option<String> = None;
        let mut bytes: Option<Vec<u8>> = None;

        loop {
            let part_pos = self.pos;
            match self.string()? {
                StrPart::Text(s) => {
                    if bytes.is_some() {
                        return Err(LiteralError::MixedStringKinds { pos: part_pos });
                    }
                    text.get_or_insert_with(String::new).push_str(&s);
                }
                StrPart::Bytes(b) => {
                    if text.is_some() {
                        return Err(LiteralError::MixedStringKinds { pos: part_pos });
                    }
                    bytes.get_or_insert_with(Vec::new).extend(b);
                }
            }

            let before_ws = self.pos;
            self.skip_ws();
            if !self.starts_string() {
                self.pos = before_ws;
                break;
            }
        }

        match (text, bytes) {
            (Some(s), None) => Ok(Literal::Str(s)),
            (None, Some(b)) => Ok(Literal::Bytes(b)),
            _ => Err(LiteralError::UnterminatedString { pos: start }),
        }
    }

    fn starts_string(&self) -> bool {
        let rest = self.rest();
        let prefix_len = rest
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(rest.len());
        let after = &rest[prefix_len..];
        (after.starts_with('\'') || after.starts_with('"'))
            && (prefix_len == 0 || string_prefix(&rest[..prefix_len]).is_some())
    }

    fn string(&mut self) -> Result<StrPart, LiteralError> {
        let start = self.pos;
        let mut prefix = StrPrefix::default();
        let prefix_end = self
            .rest()
            .find(['\'', '"'])
            .ok_or(LiteralError::UnexpectedEnd)?;
        if prefix_end > 0 {
            prefix = string_prefix(&self.rest()[..prefix_end])
                .ok_or_else(|| LiteralError::Unsupported(self.rest().to_string()))?;
            self.pos += prefix_end;
        }

        let quote = self.bump().ok_or(LiteralError::UnexpectedEnd)?;
        let triple = self.peek() == Some(quote) && self.peek_nth(1) == Some(quote);
        if triple {
            self.pos += 2;
        }

        let mut out = String::new();
        loop {
            let c = self
                .bump()
                .ok_or(LiteralError::UnterminatedString { pos: start })?;
            match c {
                c if c == quote => {
                    if !triple {
                        break;
                    }
                    if self.peek() == Some(quote) && self.peek_nth(1) == Some(quote) {
                        self.pos += 2;
                        break;
                    }
                    out.push(c);
                }
                '\n' if !triple => return Err(LiteralError::UnterminatedString { pos: start }),
                '\\' => {
                    let escape_pos = self.pos - 1;
                    let next = self
                        .bump()
                        .ok_or(LiteralError::UnterminatedString { pos: start })?;
                    if prefix.bytes && !next.is_ascii() {
                        return Err(LiteralError::NonAsciiBytes {
                            pos: self.pos - next.len_utf8(),
                        });
                    }
                    if prefix.raw {
                        out.push('\\');
                        out.push(next);
                    } else {
                        self.escape(next, prefix.bytes, escape_pos, &mut out)?;
                    }
                }
                c if prefix.bytes && !c.is_ascii() => {
                    return Err(LiteralError::NonAsciiBytes { pos: self.pos - c.len_utf8() });
                }
                c => out.push(c),
            }
        }

        if prefix.bytes {
            // Literal chars are ASCII and escapes stay at or below U+00FF
            Ok(StrPart::Bytes(out.chars().map(|c| c as u32 as u8).collect()))
        } else {
            Ok(StrPart::Text(out))
        }
    }

    fn escape(
        &mut self,
        c: char,
        bytes: bool,
        pos: usize,
        out: &mut String,
    ) -> Result<(), LiteralError> {
        match c {
            '\n' => {}
            '\\' | '\'' | '"' => out.push(c),
            'a' => out.push('\x07'),
            'b' => out.push('\x08'),
            'f' => out.push('\x0c'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'v' => out.push('\x0b'),
            '0'..='7' => {
                let mut value = c.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match self.peek().and_then(|d| d.to_digit(8)) {
                        Some(d) => {
                            value = value * 8 + d;
                            self.pos += 1;
                        }
                        None => break,
                    }
                }
                if bytes && value > 0xff {
                    return Err(LiteralError::InvalidEscape {
                        pos,
                        reason: "octal escape out of range for bytes".into(),
                    });
                }
                out.push(code_point(value, pos)?);
            }
            'x' => {
                let value = self.hex_digits(2, pos)?;
                out.push(code_point(value, pos)?);
            }
            'u' if !bytes => {
                let value = self.hex_digits(4, pos)?;
                out.push(code_point(value, pos)?);
            }
            'U' if !bytes => {
                let value = self.hex_digits(8, pos)?;
                out.push(code_point(value, pos)?);
            }
            'N' if !bytes => {
                return Err(LiteralError::InvalidEscape {
                    pos,
                    reason: "named unicode escapes are not supported".into(),
                });
            }
            other => {
                out.push('\\');
                out.push(other);
            }
        }
        Ok(())
    }

    fn hex_digits(&mut self, count: usize, pos: usize) -> Result<u32, LiteralError> {
        let rest = self.rest();
        let digits = rest.get(..count).filter(|d| d.chars().all(|c| c.is_ascii_hexdigit()));
        match digits {
            Some(d) => {
                let value = u32::from_str_radix(d, 16).map_err(|_| LiteralError::InvalidEscape {
                    pos,
                    reason: "invalid hex escape".into(),
                })?;
                self.pos += count;
                Ok(value)
            }
            None => Err(LiteralError::InvalidEscape {
                pos,
                reason: format!("expected {} hex digits", count),
            }),
        }
    }
}

fn code_point(value: u32, pos: usize) -> Result<char, LiteralError> {
    char::from_u32(value).ok_or_else(|| LiteralError::InvalidEscape {
        pos,
        reason: format!("invalid code point {:#x}", value),
    })
}

fn string_prefix(word: &str) -> Option<StrPrefix> {
    match word.to_ascii_lowercase().as_str() {
        "r" => Some(StrPrefix { raw: true, bytes: false }),
        "u" => Some(StrPrefix::default()),
        "b" => Some(StrPrefix { raw: false, bytes: true }),
        "br" | "rb" => Some(StrPrefix { raw: true, bytes: true }),
        _ => None,
    }
}

fn underscores_valid(token: &str) -> bool {
    let chars: Vec<char> = token.chars().collect();
    let prefixed = chars.len() > 2
        && chars[0] == '0'
        && matches!(chars[1], 'x' | 'X' | 'o' | 'O' | 'b' | 'B');

    (0..chars.len()).filter(|&i| chars[i] == '_').all(|i| {
        if i == 0 || i + 1 >= chars.len() {
            return false;
        }
        let (prev, next) = (chars[i - 1], chars[i + 1]);
        if prefixed {
            (i == 2 || prev.is_ascii_hexdigit()) && next.is_ascii_hexdigit()
        } else {
            prev.is_ascii_digit() && next.is_ascii_digit()
        }
    })
}

fn parse_int(digits: &str, radix: u32, negative: bool, token: &str) -> Result<Literal, LiteralError> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(LiteralError::InvalidNumber(token.to_string()));
    }
    let magnitude = u64::from_str_radix(digits, radix)
        .map_err(|_| LiteralError::IntegerOverflow(token.to_string()))?;

    let value = if negative {
        if magnitude == i64::MIN.unsigned_abs() {
            i64::MIN
        } else {
            i64::try_from(magnitude)
                .map(|v| -v)
                .map_err(|_| LiteralError::IntegerOverflow(format!("-{}", token)))?
        }
    } else {
        i64::try_from(magnitude).map_err(|_| LiteralError::IntegerOverflow(token.to_string()))?
    };
    Ok(Literal::Int(value))
}

fn insert_member(members: &mut Vec<Literal>, item: Literal) -> Result<(), LiteralError> {
    if !item.is_hashable() {
        return Err(LiteralError::Unhashable(item.type_name().to_string()));
    }
    if !members.contains(&item) {
        members.push(item);
    }
    Ok(())
}

fn insert_pair(
    pairs: &mut Vec<(Literal, Literal)>,
    key: Literal,
    value: Literal,
) -> Result<(), LiteralError> {
    if !key.is_hashable() {
        return Err(LiteralError::Unhashable(key.type_name().to_string()));
    }
    match pairs.iter_mut().find(|(k, _)| *k == key) {
        Some(pair) => pair.1 = value,
        None => pairs.push((key, value)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(text: &str) -> Literal {
        Literal::Str(text.to_string())
    }

    #[test]
    fn test_parse_constants() {
        assert_eq!(parse_literal("None"), Ok(Literal::None));
        assert_eq!(parse_literal("True"), Ok(Literal::Bool(true)));
        assert_eq!(parse_literal(" False "), Ok(Literal::Bool(false)));
    }

    #[test]
    fn test_parse_integers() {
        assert_eq!(parse_literal("200"), Ok(Literal::Int(200)));
        assert_eq!(parse_literal("-5"), Ok(Literal::Int(-5)));
        assert_eq!(parse_literal("+ 7"), Ok(Literal::Int(7)));
        assert_eq!(parse_literal("1_000"), Ok(Literal::Int(1000)));
        assert_eq!(parse_literal("0xff"), Ok(Literal::Int(255)));
        assert_eq!(parse_literal("0o17"), Ok(Literal::Int(15)));
        assert_eq!(parse_literal("0b101"), Ok(Literal::Int(5)));
        assert_eq!(parse_literal("0x_ff"), Ok(Literal::Int(255)));
        assert_eq!(parse_literal("000"), Ok(Literal::Int(0)));
        assert_eq!(
            parse_literal("-9223372036854775808"),
            Ok(Literal::Int(i64::MIN))
        );
    }

    #[test]
    fn test_parse_invalid_integers() {
        assert!(matches!(parse_literal("012"), Err(LiteralError::InvalidNumber(_))));
        assert!(matches!(parse_literal("1__0"), Err(LiteralError::InvalidNumber(_))));
        assert!(matches!(parse_literal("1_"), Err(LiteralError::InvalidNumber(_))));
        assert!(matches!(parse_literal("12abc"), Err(LiteralError::InvalidNumber(_))));
        assert!(matches!(
            parse_literal("99999999999999999999"),
            Err(LiteralError::IntegerOverflow(_))
        ));
        assert!(matches!(parse_literal("--1"), Err(LiteralError::UnexpectedChar { .. })));
    }

    #[test]
    fn test_parse_floats() {
        assert_eq!(parse_literal("1.5"), Ok(Literal::Float(1.5)));
        assert_eq!(parse_literal(".5"), Ok(Literal::Float(0.5)));
        assert_eq!(parse_literal("5."), Ok(Literal::Float(5.0)));
        assert_eq!(parse_literal("1e-3"), Ok(Literal::Float(0.001)));
        assert_eq!(parse_literal("-2.5E+2"), Ok(Literal::Float(-250.0)));
        assert!(matches!(parse_literal("1j"), Err(LiteralError::Unsupported(_))));
    }

    #[test]
    fn test_parse_strings() {
        assert_eq!(parse_literal("\"info\""), Ok(s("info")));
        assert_eq!(parse_literal("'a\\tb'"), Ok(s("a\tb")));
        assert_eq!(parse_literal("r'a\\tb'"), Ok(s("a\\tb")));
        assert_eq!(parse_literal("u'x'"), Ok(s("x")));
        assert_eq!(parse_literal("'\\x41\\u00e9\\101'"), Ok(s("A\u{e9}A")));
        assert_eq!(parse_literal("'it\\'s'"), Ok(s("it's")));
        assert_eq!(parse_literal("'''a'b'''"), Ok(s("a'b")));
        assert_eq!(parse_literal("'a' \"b\""), Ok(s("ab")));
        assert_eq!(parse_literal("'\\d'"), Ok(s("\\d")));
    }

    #[test]
    fn test_parse_bytes() {
        assert_eq!(
            parse_literal("b'a\\x00'"),
            Ok(Literal::Bytes(vec![b'a', 0]))
        );
        assert!(matches!(
            parse_literal("b'\u{e9}'"),
            Err(LiteralError::NonAsciiBytes { .. })
        ));
        assert!(matches!(
            parse_literal("b'\\\u{20ac}'"),
            Err(LiteralError::NonAsciiBytes { .. })
        ));
        assert!(matches!(
            parse_literal("rb'\\\u{20ac}'"),
            Err(LiteralError::NonAsciiBytes { .. })
        ));
        assert_eq!(parse_literal("rb'\\d'"), Ok(Literal::Bytes(b"\\d".to_vec())));
        assert!(matches!(
            parse_literal("b'a' 'b'"),
            Err(LiteralError::MixedStringKinds { .. })
        ));
    }

    #[test]
    fn test_parse_bad_strings() {
        assert!(matches!(
            parse_literal("'open"),
            Err(LiteralError::UnterminatedString { .. })
        ));
        assert!(matches!(
            parse_literal("'\\x4'"),
            Err(LiteralError::InvalidEscape { .. })
        ));
    }

    #[test]
    fn test_parse_containers() {
        assert_eq!(
            parse_literal("[1, 'a', None]"),
            Ok(Literal::List(vec![Literal::Int(1), s("a"), Literal::None]))
        );
        assert_eq!(parse_literal("[]"), Ok(Literal::List(vec![])));
        assert_eq!(parse_literal("()"), Ok(Literal::Tuple(vec![])));
        assert_eq!(parse_literal("(1)"), Ok(Literal::Int(1)));
        assert_eq!(parse_literal("(1,)"), Ok(Literal::Tuple(vec![Literal::Int(1)])));
        assert_eq!(
            parse_literal("1, 2"),
            Ok(Literal::Tuple(vec![Literal::Int(1), Literal::Int(2)]))
        );
        assert_eq!(parse_literal("{}"), Ok(Literal::Dict(vec![])));
        assert_eq!(parse_literal("set()"), Ok(Literal::Set(vec![])));
        assert_eq!(
            parse_literal("{1, 2, 1,}"),
            Ok(Literal::Set(vec![Literal::Int(1), Literal::Int(2)]))
        );
        assert_eq!(
            parse_literal("{'a': 1, 'b': [2], 'a': 3}"),
            Ok(Literal::Dict(vec![
                (s("a"), Literal::Int(3)),
                (s("b"), Literal::List(vec![Literal::Int(2)])),
            ]))
        );
    }

    #[test]
    fn test_parse_nested_multiline() {
        assert_eq!(
            parse_literal("[\n  (1, 2),\n  {'k': -0.5},\n]"),
            Ok(Literal::List(vec![
                Literal::Tuple(vec![Literal::Int(1), Literal::Int(2)]),
                Literal::Dict(vec![(s("k"), Literal::Float(-0.5))]),
            ]))
        );
    }

    #[test]
    fn test_nesting_limit() {
        let at_limit = format!("{}{}", "[".repeat(MAX_DEPTH), "]".repeat(MAX_DEPTH));
        assert!(parse_literal(&at_limit).is_ok());

        let too_deep = format!("{}{}", "(".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
        assert!(matches!(parse_literal(&too_deep), Err(LiteralError::TooDeep { .. })));

        assert!(matches!(
            parse_literal(&"[".repeat(200_000)),
            Err(LiteralError::TooDeep { .. })
        ));
    }

    #[test]
    fn test_reject_non_literals() {
        assert_eq!(parse_literal(""), Err(LiteralError::Empty));
        assert_eq!(parse_literal("   "), Err(LiteralError::Empty));
        assert!(matches!(parse_literal("info"), Err(LiteralError::Unsupported(_))));
        assert!(matches!(parse_literal("os.system('x')"), Err(LiteralError::Unsupported(_))));
        assert!(matches!(parse_literal("set([1])"), Err(LiteralError::Unsupported(_))));
        assert!(matches!(parse_literal("1 + 2"), Err(LiteralError::TrailingInput { .. })));
        assert!(matches!(parse_literal("[1, 2"), Err(LiteralError::UnexpectedEnd)));
        assert!(matches!(parse_literal("{[1]: 2}"), Err(LiteralError::Unhashable(_))));
        assert!(matches!(parse_literal("{[1]}"), Err(LiteralError::Unhashable(_))));
    }
}
