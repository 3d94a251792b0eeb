#[cfg(test)]
mod tests {
    use std::ffi::c_void;

    use crate::{stringify, type_of, Direction, LuaType, LuaValue, ValueError};

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn one_of_each() -> Vec<LuaValue> {
        vec![
            LuaValue::nil(),
            LuaValue::boolean(true),
            LuaValue::number(3.5),
            LuaValue::string("hi"),
            LuaValue::function(),
            LuaValue::table(),
            LuaValue::light_user_data(std::ptr::null_mut()),
        ]
    }

    #[test]
    fn every_factory_reports_its_own_kind() {
        init_logger();
        let tags: Vec<LuaType> = one_of_each().iter().map(type_of).collect();
        assert_eq!(tags, LuaType::ALL.to_vec());
    }

    #[test]
    fn stringify_each_kind() {
        init_logger();
        assert_eq!(stringify(&LuaValue::nil()), "nil");
        assert_eq!(stringify(&LuaValue::boolean(true)), "true");
        assert_eq!(stringify(&LuaValue::boolean(false)), "false");
        assert_eq!(stringify(&LuaValue::number(3.5)), "3.500000");
        assert_eq!(stringify(&LuaValue::string("hi")), "hi");
        assert_eq!(stringify(&LuaValue::function()), "function");
        assert_eq!(stringify(&LuaValue::table()), "table");
        assert_eq!(
            stringify(&LuaValue::light_user_data(std::ptr::null_mut())),
            "lightuserdata"
        );
    }

    #[test]
    fn stringify_matches_display() {
        for v in one_of_each() {
            assert_eq!(v.stringify(), format!("{v}"));
        }
        assert_eq!(format!("{:.1}", LuaValue::number(2.26)), "2.3");
    }

    #[test]
    fn numbers_accept_the_whole_double_domain() {
        init_logger();
        for n in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, f64::MAX, f64::MIN_POSITIVE, -0.0] {
            let v = LuaValue::number(n);
            assert_eq!(v.type_of(), LuaType::Number);
            let back = v.as_number().unwrap_or_default();
            assert_eq!(back.to_bits(), n.to_bits());
        }
        assert_eq!(LuaValue::number(f64::INFINITY).to_string(), "inf");
        assert_eq!(LuaValue::number(f64::NAN).to_string(), "nan");
    }

    #[test]
    fn strings_are_copied_on_construction() -> anyhow::Result<()> {
        init_logger();
        let mut buf = String::from("abc");
        let v = LuaValue::string(&buf);
        buf.clear();
        buf.push_str("xyz");

        let s: &str = (&v).try_into()?;
        assert_eq!(s, "abc");
        assert_eq!(stringify(&v), "abc");
        Ok(())
    }

    #[test]
    fn light_user_data_round_trips_the_pointer() -> anyhow::Result<()> {
        init_logger();
        let mut slot = [0u8; 4];
        let p = slot.as_mut_ptr() as *mut c_void;

        let v = LuaValue::light_user_data(p);
        assert_eq!(v.as_light_user_data(), Some(p));
        let back: *mut c_void = v.try_into()?;
        assert_eq!(back, p);

        let null = LuaValue::from(std::ptr::null_mut::<c_void>());
        assert_eq!(null.as_light_user_data(), Some(std::ptr::null_mut()));
        assert_eq!(stringify(&null), "lightuserdata");
        Ok(())
    }

    #[test]
    fn raw_codes_cross_the_boundary() -> anyhow::Result<()> {
        init_logger();
        for v in one_of_each() {
            let code = v.type_of().to_raw();
            assert_eq!(LuaType::from_raw(code)?, v.type_of());
        }
        assert_eq!(LuaType::from_raw(8), Err(ValueError::UnsupportedRawType(8)));
        assert_eq!(LuaType::from_raw(42), Err(ValueError::InvalidRawType(42)));
        Ok(())
    }

    #[test]
    fn only_host_constructible_kinds_go_in() {
        let inputs: Vec<LuaType> = one_of_each()
            .iter()
            .filter(|v| v.direction().is_input())
            .map(LuaValue::type_of)
            .collect();
        assert_eq!(
            inputs,
            [
                LuaType::Nil,
                LuaType::Boolean,
                LuaType::Number,
                LuaType::String,
                LuaType::LightUserData,
            ]
        );
        assert_eq!(LuaValue::table().direction(), Direction::Out);
    }

    #[test]
    fn mismatched_extraction_is_an_error() {
        init_logger();
        let err = String::try_from(LuaValue::table()).unwrap_err();
        assert_eq!(
            err,
            ValueError::TypeMismatch {
                expected: LuaType::String,
                actual: LuaType::Table,
            }
        );
        assert_eq!(err.to_string(), "Type mismatch: expected: string; got: table");
    }
}
