#![no_std]

mod contract;
mod delegator;
mod errors;
mod events;
mod storage;

pub use crate::contract::{OperatorDelegator, OperatorDelegatorClient};
