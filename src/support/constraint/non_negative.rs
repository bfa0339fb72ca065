use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// # Examples
///
/// ```
/// use heatpipe_models::support::constraint::NonNegative;
/// use uom::si::{f64::Pressure, pressure::pascal};
///
/// assert!(NonNegative::new(Pressure::new::<pascal>(0.0)).is_ok());
/// assert!(NonNegative::new(Pressure::new::<pascal>(-1.0)).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Pressure, pressure::kilopascal};

    #[test]
    fn floats() {
        assert!(NonNegative::check(&0.0).is_ok());
        assert!(NonNegative::check(&3.0).is_ok());
        assert_eq!(NonNegative::check(&-0.1), Err(ConstraintError::Negative));
        assert_eq!(NonNegative::check(&f64::NAN), Err(ConstraintError::NotANumber));
    }

    #[test]
    fn pressures() {
        let p = NonNegative::new(Pressure::new::<kilopascal>(12.0)).unwrap();
        assert_eq!(p.into_inner().get::<kilopascal>(), 12.0);

        assert!(NonNegative::new(Pressure::new::<kilopascal>(-12.0)).is_err());
    }
}
