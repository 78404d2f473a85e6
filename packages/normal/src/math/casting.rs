use soroban_sdk::{log, panic_with_error, Env};

use crate::error::ErrorCode;

pub trait Cast: Sized {
    /// Perform a casting operation with error handling.
    fn cast<T: CastFrom<Self>>(self, env: &Env) -> T {
        T::cast_from(self, env)
    }
}

pub trait CastFrom<T>: Sized {
    fn cast_from(value: T, env: &Env) -> Self;
}

macro_rules! impl_cast {
    ($src:ty, $dst:ty) => {
        impl CastFrom<$src> for $dst {
            fn cast_from(value: $src, env: &Env) -> Self {
                value.try_into().unwrap_or_else(|_| {
                    log!(
                        env,
                        "Casting error: Failed to cast {} to {}",
                        stringify!($src),
                        stringify!($dst)
                    );
                    panic_with_error!(env, ErrorCode::CastingFailure);
                })
            }
        }
    };
}

impl_cast!(u64, i128);
impl_cast!(u64, i64);
impl_cast!(u32, i128);
impl_cast!(i64, i128);
impl_cast!(i64, u64);
impl_cast!(i128, i64);
impl_cast!(i128, u128);
impl_cast!(u128, i128);

impl Cast for u128 {}
impl Cast for u64 {}
impl Cast for u32 {}
impl Cast for i128 {}
impl Cast for i64 {}
