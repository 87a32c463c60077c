use json::JsonValue;
use tynum_eval::{Int, IntSet, Truth, Value};

/// Integers are dumped as strings: a literal can be longer than what a json
/// number can hold.
pub trait DumpJson {
    fn dump_json(&self) -> JsonValue;
}

impl DumpJson for Int {
    fn dump_json(&self) -> JsonValue {
        self.to_string().into()
    }
}

impl DumpJson for Truth {
    fn dump_json(&self) -> JsonValue {
        match self.to_bool() {
            Some(b) => b.into(),
            None => JsonValue::Null,
        }
    }
}

impl DumpJson for IntSet {
    fn dump_json(&self) -> JsonValue {
        JsonValue::Array(self.iter().map(|n| n.to_string().into()).collect())
    }
}

impl DumpJson for Value {
    fn dump_json(&self) -> JsonValue {
        match self {
            Value::Int(n) => n.dump_json(),
            Value::Truth(t) => t.dump_json(),
            Value::Set(s) => s.dump_json(),
        }
    }
}

impl<T: DumpJson> DumpJson for Vec<T> {
    fn dump_json(&self) -> JsonValue {
        JsonValue::Array(self.iter().map(|v| v.dump_json()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tynum_eval::IntLit;

    #[test]
    fn dump_test() {
        let set: IntSet = vec![IntLit::from(2i64), IntLit::from(-1i64)].into_iter().collect();

        let samples = vec![
            (Value::Int(Int::from(-42i64)).dump_json(), r#""-42""#),
            (Value::Int(Int::PosInf).dump_json(), r#""Infinity""#),
            (Value::Truth(Truth::True).dump_json(), "true"),
            (Value::Truth(Truth::Unknown).dump_json(), "null"),
            (Value::Set(set).dump_json(), r#"["-1","2"]"#),
            (Value::Set(IntSet::new()).dump_json(), "[]"),
            (vec![Int::Unbounded, Int::zero()].dump_json(), r#"["number","0"]"#),
        ];

        for (dumped, expected) in samples.into_iter() {
            assert_eq!(dumped.dump(), expected);
        }
    }
}
