// Show.rs - String rendering as a capability
// Renderings read like source literals: strings are quoted, sequences are
// bracketed, and containers render their contents recursively.

/// Trait for types with a canonical string representation
pub trait Show {
    fn show(&self) -> String;
}

/// Dispatch to the `Show` capability of `x`
pub fn show<T: Show + ?Sized>(x: &T) -> String {
    x.show()
}

macro_rules! impl_show_via_display {
    ($($t:ty),* $(,)?) => {
        $(
            impl Show for $t {
                fn show(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_show_via_display!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool);

// Positive exponents carry an explicit sign: `1e+21`, `1.5e-7`
fn exponent_form(rendered: String) -> String {
    if let Some((mantissa, exponent)) = rendered.split_once('e') {
        if !exponent.starts_with('-') {
            return format!("{}e+{}", mantissa, exponent);
        }
    }
    rendered
}

macro_rules! impl_show_float {
    ($($t:ty),*) => {
        $(
            impl Show for $t {
                fn show(&self) -> String {
                    if self.is_nan() {
                        "NaN".to_string()
                    } else if self.is_infinite() {
                        let rendered = if self.is_sign_negative() { "-Infinity" } else { "Infinity" };
                        rendered.to_string()
                    } else {
                        let magnitude = self.abs();
                        if magnitude >= 1e21 || (magnitude != 0.0 && magnitude < 1e-6) {
                            exponent_form(format!("{:e}", self))
                        } else {
                            self.to_string()
                        }
                    }
                }
            }
        )*
    };
}

impl_show_float!(f32, f64);

impl Show for str {
    fn show(&self) -> String {
        serde_json::Value::String(self.to_owned()).to_string()
    }
}

impl Show for String {
    fn show(&self) -> String {
        self.as_str().show()
    }
}

impl Show for char {
    fn show(&self) -> String {
        serde_json::Value::String(self.to_string()).to_string()
    }
}

impl Show for () {
    fn show(&self) -> String {
        "null".to_string()
    }
}

impl<T: Show + ?Sized> Show for Box<T> {
    fn show(&self) -> String {
        (**self).show()
    }
}

impl<T: Show + ?Sized> Show for &T {
    fn show(&self) -> String {
        (**self).show()
    }
}

impl<T: Show> Show for [T] {
    fn show(&self) -> String {
        let items: Vec<String> = self.iter().map(Show::show).collect();
        format!("[{}]", items.join(", "))
    }
}

impl<T: Show> Show for Vec<T> {
    fn show(&self) -> String {
        self.as_slice().show()
    }
}

impl<T: Show> Show for Option<T> {
    fn show(&self) -> String {
        match self {
            Some(x) => format!("Some({})", x.show()),
            None => "None".to_string(),
        }
    }
}

impl<A: Show, B: Show> Show for (A, B) {
    fn show(&self) -> String {
        format!("[{}, {}]", self.0.show(), self.1.show())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_show_numbers() {
        assert_eq!(show(&42), "42");
        assert_eq!(show(&3.0f64), "3");
        assert_eq!(show(&1.5f64), "1.5");
        assert_eq!(show(&-0.0f64), "-0");
        assert_eq!(show(&f64::NAN), "NaN");
        assert_eq!(show(&f64::INFINITY), "Infinity");
        assert_eq!(show(&f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_show_float_magnitudes() {
        assert_eq!(show(&1e21f64), "1e+21");
        assert_eq!(show(&-2.5e22f64), "-2.5e+22");
        assert_eq!(show(&1e20f64), "100000000000000000000");
        assert_eq!(show(&1e-7f64), "1e-7");
        assert_eq!(show(&1.5e-7f64), "1.5e-7");
        assert_eq!(show(&0.000001f64), "0.000001");
    }

    #[test]
    fn test_show_strings() {
        assert_eq!(show("abc"), "\"abc\"");
        assert_eq!(show(&"a\"b".to_string()), "\"a\\\"b\"");
        assert_eq!(show(&'x'), "\"x\"");
    }

    #[test]
    fn test_show_containers() {
        assert_eq!(show(&vec![1, 2, 3]), "[1, 2, 3]");
        assert_eq!(show(&Vec::<i32>::new()), "[]");
        assert_eq!(show(&vec!["a", "b"]), "[\"a\", \"b\"]");
        assert_eq!(show(&Some(vec![true])), "Some([true])");
        assert_eq!(show(&None::<i32>), "None");
        assert_eq!(show(&(1, "x")), "[1, \"x\"]");
    }
}
