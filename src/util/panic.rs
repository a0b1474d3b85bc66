/// Asserts that the provided block panics. With a second argument, the panic message must also
/// contain the provided text.
macro_rules! assert_panics {
    ($run:block) => {
        assert!(
            std::panic::catch_unwind(|| $run).is_err(),
            "assertion failed to panic"
        );
    };
    ($run:block, $expected:literal) => {
        let payload = std::panic::catch_unwind(|| $run).expect_err("assertion failed to panic");
        let message = payload
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| payload.downcast_ref::<&str>().copied())
            .unwrap_or_default();
        assert!(
            message.contains($expected),
            "panic message {message:?} doesn't mention {:?}",
            $expected
        );
    };
}

pub(crate) use assert_panics;
