use crate::engine::put::value::{qualifier_bytes, value_bytes};
use crate::engine::put::{CellValue, ValueDomain};

#[test]
fn integers_render_as_decimal_text() {
    assert_eq!(5i64.to_cell_bytes().as_ref(), b"5");
    assert_eq!((-42i64).to_cell_bytes().as_ref(), b"-42");
    assert_eq!(i64::MAX.to_cell_bytes().as_ref(), b"9223372036854775807");
}

#[test]
fn floats_render_as_shortest_text() {
    assert_eq!(7.0f64.to_cell_bytes().as_ref(), b"7.0");
    assert_eq!(0.1f64.to_cell_bytes().as_ref(), b"0.1");
    assert_eq!((-2.5f64).to_cell_bytes().as_ref(), b"-2.5");
}

#[test]
fn non_finite_floats_use_jvm_spellings() {
    assert_eq!(f64::NAN.to_cell_bytes().as_ref(), b"NaN");
    assert_eq!(f64::INFINITY.to_cell_bytes().as_ref(), b"Infinity");
    assert_eq!(f64::NEG_INFINITY.to_cell_bytes().as_ref(), b"-Infinity");
}

#[test]
fn large_floats_keep_a_parseable_exponent() {
    assert_eq!(1e20f64.to_cell_bytes().as_ref(), b"1e20");
}

#[test]
fn null_yields_no_bytes() {
    assert_eq!(value_bytes::<i64>(None), None);
    assert_eq!(value_bytes(Some(&3i64)).unwrap().as_ref(), b"3");
}

#[test]
fn qualifiers_are_utf8() {
    assert_eq!(qualifier_bytes("größe").as_ref(), "größe".as_bytes());
}

#[test]
fn domains_match_types() {
    assert_eq!(<i64 as CellValue>::DOMAIN, ValueDomain::Integer);
    assert_eq!(<f64 as CellValue>::DOMAIN, ValueDomain::Float);
}
