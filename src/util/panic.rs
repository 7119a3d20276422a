/// Asserts that `$run` panics. When given an error as well, also asserts that the panic message is
/// that error's text, which is what [`throw`](crate::util::result::ResultExtension::throw) raises.
macro_rules! assert_panics {
    ($run:block) => {
        assert!(std::panic::catch_unwind(|| $run).is_err(), "expected a panic");
    };
    ($run:block, $error:expr) => {
        let Err(payload) = std::panic::catch_unwind(|| $run) else {
            panic!("expected a panic with message: {}", $error);
        };
        assert_eq!(
            payload.downcast_ref::<String>().map(String::as_str),
            Some($error.to_string().as_str()),
            "The panic should carry the error's message."
        );
    };
}

pub(crate) use assert_panics;
