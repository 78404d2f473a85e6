/// Log a message and abort the invocation with `$err` unless `$assert`
/// holds. Entry points use this for pre-mutation validation so a failed
/// check rolls the whole call back.
#[macro_export]
macro_rules! validate {
    ($env:expr, $assert:expr, $err:expr, $($arg:tt)+) => {
        if !($assert) {
            soroban_sdk::log!($env, $($arg)+);
            soroban_sdk::panic_with_error!($env, $err);
        }
    };
}

// Validate all bps to be between the range 0..10_000
#[macro_export]
macro_rules! validate_bps {
    ($($value:expr),+) => {
        const MIN_BPS: i64 = 0;
        const MAX_BPS: i64 = 10_000;
        $(
            assert!((MIN_BPS..=MAX_BPS).contains(&$value), "The value {} is out of range. Must be between {} and {} bps.", $value, MIN_BPS, MAX_BPS);
        )+
    };
}

#[macro_export]
macro_rules! get_then_update_id {
    ($struct:expr, $property:ident) => {{
        let current_id = $struct.$property;
        $struct.$property = current_id.checked_add(1).or(Some(1)).unwrap();
        current_id
    }};
}
