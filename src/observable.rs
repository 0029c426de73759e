//! Observable memory: a `MemoryBus` decorator that lets callbacks intercept
//! reads and writes at chosen addresses.
//!
//! This is how memory-mapped I/O is simulated on top of plain RAM. A
//! "putc" port, for example, is a write subscriber on one address that
//! forwards the byte to a terminal; a "getc" port is a read subscriber that
//! returns the next pending key.
//!
//! # Subscriber resolution
//!
//! Every subscriber registered for an address runs on every access, in the
//! order they were subscribed. Each returns `Option<u8>`:
//!
//! - reads: the last `Some` is the byte handed to the CPU; the underlying cell
//!   is not modified. With no `Some`, the raw cell value is returned.
//! - writes: the last `Some` replaces the value being stored. With no `Some`,
//!   the original value is stored.
//!
//! # Example
//!
//! ```rust
//! use mpu65::{FlatMemory, MemoryBus, ObservableMemory};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let output = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&output);
//!
//! let mut memory = ObservableMemory::new(FlatMemory::new());
//! memory.subscribe_to_write([0xF001], move |_addr, value| {
//!     sink.borrow_mut().push(value);
//!     None
//! });
//! memory.subscribe_to_read([0xF004], |_addr| Some(b'A'));
//!
//! memory.write(0xF001, b'H');
//! assert_eq!(*output.borrow(), vec![b'H']);
//! assert_eq!(memory.read(0xF004), b'A');
//! ```

use crate::MemoryBus;
use std::collections::HashMap;
use std::rc::Rc;

/// Callback invoked on a read of a subscribed address.
pub type ReadSubscriber = Rc<dyn Fn(u16) -> Option<u8>>;

/// Callback invoked on a write to a subscribed address, with the value being written.
pub type WriteSubscriber = Rc<dyn Fn(u16, u8) -> Option<u8>>;

/// Memory bus wrapper that routes accesses through subscribed callbacks.
///
/// The CPU is unaware of the wrapper: it implements the same `MemoryBus`
/// contract as the subject it decorates.
pub struct ObservableMemory<M: MemoryBus> {
    subject: M,
    read_subscribers: HashMap<u16, Vec<ReadSubscriber>>,
    write_subscribers: HashMap<u16, Vec<WriteSubscriber>>,
}

impl<M: MemoryBus> ObservableMemory<M> {
    /// Wraps `subject` with no subscribers.
    pub fn new(subject: M) -> Self {
        Self {
            subject,
            read_subscribers: HashMap::new(),
            write_subscribers: HashMap::new(),
        }
    }

    /// Registers `subscriber` for reads of every address in `addresses`.
    ///
    /// Each call registers a new callback. To register one callback on
    /// several occasions without it running twice, keep it as a
    /// [`ReadSubscriber`] and use [`subscribe_shared_to_read`](Self::subscribe_shared_to_read).
    pub fn subscribe_to_read<I, F>(&mut self, addresses: I, subscriber: F)
    where
        I: IntoIterator<Item = u16>,
        F: Fn(u16) -> Option<u8> + 'static,
    {
        self.subscribe_shared_to_read(addresses, Rc::new(subscriber));
    }

    /// Registers a shared read callback. An address already holding this
    /// exact callback is left unchanged.
    pub fn subscribe_shared_to_read<I>(&mut self, addresses: I, subscriber: ReadSubscriber)
    where
        I: IntoIterator<Item = u16>,
    {
        for addr in addresses {
            let list = self.read_subscribers.entry(addr).or_default();
            if !list.iter().any(|s| Rc::ptr_eq(s, &subscriber)) {
                list.push(Rc::clone(&subscriber));
            }
        }
    }

    /// Registers `subscriber` for writes to every address in `addresses`.
    pub fn subscribe_to_write<I, F>(&mut self, addresses: I, subscriber: F)
    where
        I: IntoIterator<Item = u16>,
        F: Fn(u16, u8) -> Option<u8> + 'static,
    {
        self.subscribe_shared_to_write(addresses, Rc::new(subscriber));
    }

    /// Registers a shared write callback. An address already holding this
    /// exact callback is left unchanged.
    pub fn subscribe_shared_to_write<I>(&mut self, addresses: I, subscriber: WriteSubscriber)
    where
        I: IntoIterator<Item = u16>,
    {
        for addr in addresses {
            let list = self.write_subscribers.entry(addr).or_default();
            if !list.iter().any(|s| Rc::ptr_eq(s, &subscriber)) {
                list.push(Rc::clone(&subscriber));
            }
        }
    }

    /// Writes `bytes` straight into the subject, bypassing write subscribers.
    ///
    /// Used for loading program images into memory that has I/O ports mapped.
    pub fn write_bytes(&mut self, start: u16, bytes: &[u8]) {
        self.subject.load(start, bytes);
    }

    /// Shared access to the wrapped bus.
    pub fn subject(&self) -> &M {
        &self.subject
    }

    /// Mutable access to the wrapped bus (bypasses subscribers).
    pub fn subject_mut(&mut self) -> &mut M {
        &mut self.subject
    }

    /// Unwraps the decorator, dropping all subscribers.
    pub fn into_inner(self) -> M {
        self.subject
    }
}

impl<M: MemoryBus> MemoryBus for ObservableMemory<M> {
    fn read(&self, addr: u16) -> u8 {
        let observed = self
            .read_subscribers
            .get(&addr)
            .and_then(|subscribers| {
                subscribers
                    .iter()
                    .fold(None, |last, subscriber| subscriber(addr).or(last))
            });

        match observed {
            Some(value) => value,
            None => self.subject.read(addr),
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        let stored = self
            .write_subscribers
            .get(&addr)
            .and_then(|subscribers| {
                subscribers
                    .iter()
                    .fold(None, |last, subscriber| subscriber(addr, value).or(last))
            })
            .unwrap_or(value);

        self.subject.write(addr, stored);
    }
}
