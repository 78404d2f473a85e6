#![no_std]

mod contract;
mod errors;
mod events;
mod queue;
mod storage;

pub use crate::contract::{WithdrawQueue, WithdrawQueueClient};
pub use crate::storage::{BufferInit, RequestStatus, WithdrawBuffer, WithdrawRequest};

#[cfg(test)]
mod tests;
