//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks
//! and the stdin thread. Uses embassy-sync primitives for safe async
//! communication.

use core::sync::atomic::AtomicU32;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use boxbreath_core::traits::ClockSample;

use crate::input::Command;

/// Channel capacity for keyboard commands
const INPUT_CHANNEL_SIZE: usize = 8;

/// Keyboard commands from the stdin thread
pub static INPUT_CHANNEL: Channel<CriticalSectionRawMutex, Command, INPUT_CHANNEL_SIZE> =
    Channel::new();

/// Latest frame sample for the controller
///
/// Only the newest sample matters; an unread one is overwritten.
pub static FRAME_SIGNAL: Signal<CriticalSectionRawMutex, ClockSample> = Signal::new();

/// Subscription the tick task samples for (0 = none)
pub static ACTIVE_SUBSCRIPTION: AtomicU32 = AtomicU32::new(0);
