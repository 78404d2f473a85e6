#![no_std]

mod contract;
mod errors;
mod events;
mod queue;
mod storage;

pub use crate::contract::{DepositQueue, DepositQueueClient};
