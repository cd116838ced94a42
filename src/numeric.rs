use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidArgument {
    #[error("{name} is missing")]
    Missing { name: &'static str },
    #[error("{name} must be a finite number, received {value}")]
    NotFinite { name: &'static str, value: f64 },
}

/// Add two numbers with strict argument validation.
///
/// The sole fallible function in this crate: the string utilities fail soft
/// to empty output, while a missing or non-finite argument here is a caller
/// bug and is reported as such, first argument checked first.
pub fn add_numbers(a: Option<f64>, b: Option<f64>) -> Result<f64, InvalidArgument> {
    let a = validate(a, "first argument")?;
    let b = validate(b, "second argument")?;
    Ok(a + b)
}

fn validate(value: Option<f64>, name: &'static str) -> Result<f64, InvalidArgument> {
    match value {
        None => Err(InvalidArgument::Missing { name }),
        Some(v) if !v.is_finite() => Err(InvalidArgument::NotFinite { name, value: v }),
        Some(v) => Ok(v),
    }
}
