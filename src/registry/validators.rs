//! Value validators
//!
//! Each constructor returns a [`Validator`] that an [`OptionTable`] runs
//! before accepting a write. The error string ends up in the skip diagnostic.
//!
//! [`OptionTable`]: super::OptionTable

use std::sync::Arc;

use crate::literal::Literal;
use crate::registry::Validator;

fn type_check(expected: &'static str, ok: fn(&Literal) -> bool) -> Validator {
    Arc::new(move |value: &Literal| {
        if ok(value) {
            Ok(())
        } else {
            Err(format!(
                "Value must be an instance of {}, got {}",
                expected,
                value.type_name()
            ))
        }
    })
}

pub fn is_int() -> Validator {
    type_check("int", |v| matches!(v, Literal::Int(_)))
}

pub fn is_bool() -> Validator {
    type_check("bool", |v| matches!(v, Literal::Bool(_)))
}

pub fn is_float() -> Validator {
    type_check("float", |v| matches!(v, Literal::Float(_)))
}

pub fn is_text() -> Validator {
    type_check("str|bytes", |v| matches!(v, Literal::Str(_) | Literal::Bytes(_)))
}

/// `None` or an integer that is at least zero
pub fn is_nonnegative_int() -> Validator {
    Arc::new(|value: &Literal| match value {
        Literal::None => Ok(()),
        Literal::Int(i) if *i >= 0 => Ok(()),
        other => Err(format!(
            "Value must be a nonnegative integer or None, got {}",
            other
        )),
    })
}

/// Value must equal one of `allowed`
pub fn is_one_of(allowed: Vec<Literal>) -> Validator {
    Arc::new(move |value: &Literal| {
        if allowed.contains(value) {
            Ok(())
        } else {
            let options: Vec<String> = allowed.iter().map(ToString::to_string).collect();
            Err(format!("Value must be one of {}", options.join("|")))
        }
    })
}

/// `None` or anything `inner` accepts
pub fn is_optional(inner: Validator) -> Validator {
    Arc::new(move |value: &Literal| {
        if value.is_none() {
            Ok(())
        } else {
            inner(value)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_validators() {
        assert!(is_int()(&Literal::Int(3)).is_ok());
        assert!(is_int()(&Literal::Bool(true)).is_err());
        assert!(is_bool()(&Literal::Bool(false)).is_ok());
        assert!(is_float()(&Literal::Int(1)).is_err());
        assert!(is_text()(&Literal::from("x")).is_ok());

        let err = is_int()(&Literal::from("bad")).unwrap_err();
        assert_eq!(err, "Value must be an instance of int, got str");
    }

    #[test]
    fn test_nonnegative_int() {
        let check = is_nonnegative_int();
        assert!(check(&Literal::None).is_ok());
        assert!(check(&Literal::Int(0)).is_ok());
        assert!(check(&Literal::Int(-1)).is_err());
        assert!(check(&Literal::from("bad")).is_err());
    }

    #[test]
    fn test_one_of_and_optional() {
        let check = is_one_of(vec![Literal::from("truncate"), Literal::from("info")]);
        assert!(check(&Literal::from("info")).is_ok());
        let err = check(&Literal::from("wide")).unwrap_err();
        assert_eq!(err, "Value must be one of 'truncate'|'info'");

        let optional = is_optional(is_float());
        assert!(optional(&Literal::None).is_ok());
        assert!(optional(&Literal::Float(0.5)).is_ok());
        assert!(optional(&Literal::from("x")).is_err());
    }
}
