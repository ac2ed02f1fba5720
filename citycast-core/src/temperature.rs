//! Temperature scales and conversion.
//!
//! OpenWeatherMap reports temperature in Kelvin unless asked otherwise; the
//! display side wants Celsius and Fahrenheit. The newtypes keep readings in
//! different scales from being mixed up in transit. Rounding for display is
//! the lookup client's concern, not this module's.

/// An absolute-scale reading, as reported by the provider.
#[derive(Copy, Clone, Debug)]
pub struct Kelvin(f64);

impl Kelvin {
    pub fn new(v: f64) -> Kelvin {
        Kelvin(v)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Celsius(f64);

impl Celsius {
    pub fn new(v: f64) -> Celsius {
        Celsius(v)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Fahrenheit(f64);

impl Fahrenheit {
    pub fn new(v: f64) -> Fahrenheit {
        Fahrenheit(v)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<Kelvin> for Celsius {
    fn from(k: Kelvin) -> Self {
        Celsius(k.0 - 273.15)
    }
}

impl From<Celsius> for Fahrenheit {
    fn from(c: Celsius) -> Self {
        Fahrenheit(c.0 * (9.0 / 5.0) + 32.0)
    }
}

impl From<Kelvin> for Fahrenheit {
    fn from(k: Kelvin) -> Self {
        Celsius::from(k).into()
    }
}

/// Convert an absolute Kelvin reading to both offset scales.
///
/// Pure and total over all `f64` inputs: nothing is validated or rejected,
/// and non-finite readings pass straight through the arithmetic.
pub fn convert(kelvin: Kelvin) -> (Celsius, Fahrenheit) {
    let celsius = Celsius::from(kelvin);
    let fahrenheit = Fahrenheit::from(celsius);
    (celsius, fahrenheit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn freezing_point_of_water() {
        let (c, f) = convert(Kelvin::new(273.15));
        assert_eq!(c.value(), 0.0);
        assert_eq!(f.value(), 32.0);
    }

    #[test]
    fn mild_autumn_day() {
        let (c, f) = convert(Kelvin::new(283.15));
        assert!((c.value() - 10.0).abs() < 1e-9);
        assert!((f.value() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn absolute_zero() {
        let (c, f) = convert(Kelvin::new(0.0));
        assert_eq!(c.value(), -273.15);
        assert_eq!(f.value(), -273.15 * (9.0 / 5.0) + 32.0);
    }

    #[test]
    fn negative_kelvin_is_not_rejected() {
        let (c, f) = convert(Kelvin::new(-10.0));
        assert_eq!(c.value(), -10.0 - 273.15);
        assert_eq!(f.value(), (-10.0 - 273.15) * (9.0 / 5.0) + 32.0);
    }

    #[test]
    fn non_finite_readings_pass_through() {
        let (c, f) = convert(Kelvin::new(f64::NAN));
        assert!(c.value().is_nan());
        assert!(f.value().is_nan());

        let (c, f) = convert(Kelvin::new(f64::INFINITY));
        assert_eq!(c.value(), f64::INFINITY);
        assert_eq!(f.value(), f64::INFINITY);
    }

    #[test]
    fn from_impls_agree_with_convert() {
        let k = Kelvin::new(300.0);
        let (c, f) = convert(k);
        assert_eq!(Celsius::from(k).value(), c.value());
        assert_eq!(Fahrenheit::from(k).value(), f.value());
    }

    proptest! {
        #[test]
        fn matches_the_formulas(k in -1.0e6f64..1.0e6) {
            let (c, f) = convert(Kelvin::new(k));
            prop_assert_eq!(c.value(), k - 273.15);
            prop_assert_eq!(f.value(), (k - 273.15) * (9.0 / 5.0) + 32.0);
        }

        #[test]
        fn deterministic(k in -1.0e9f64..1.0e9) {
            let (c1, f1) = convert(Kelvin::new(k));
            let (c2, f2) = convert(Kelvin::new(k));
            prop_assert_eq!(c1.value(), c2.value());
            prop_assert_eq!(f1.value(), f2.value());
        }

        #[test]
        fn ordering_is_preserved(a in -1.0e6f64..1.0e6, b in -1.0e6f64..1.0e6) {
            prop_assume!(a < b);
            let (ca, fa) = convert(Kelvin::new(a));
            let (cb, fb) = convert(Kelvin::new(b));
            // ties are possible at f64 resolution, reversals are not
            prop_assert!(ca.value() <= cb.value());
            prop_assert!(fa.value() <= fb.value());
        }
    }
}
