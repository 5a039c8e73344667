//! # Memory Bus
//!
//! This module provides the `MemoryBus` trait the dispatcher executes
//! against, the `Device` capability for memory-mapped peripherals, and
//! `Bus`, a flat 64KB RAM with page-granularity device overrides.
//!
//! ## Page Dispatch
//!
//! The address space is split into 256 pages of 256 bytes. Each page may be
//! bound to a device. `read`/`write` look at the page table first
//! (`addr >> 8`) and only touch RAM when the page is unmapped.
//!
//! ## Raw Access
//!
//! Indexing a `Bus` (`bus[addr]`) and `Bus::load` go straight to the backing
//! RAM array and never call into a device, even on a mapped page. This is
//! how programs and fixtures are seeded without tripping device side
//! effects. It is observable: a byte seeded under a mapped page is invisible
//! to `read` until the page is unmapped.

use std::cell::RefCell;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::rc::Rc;

/// Size of one mappable page in bytes.
pub const PAGE_SIZE: usize = 256;

const PAGE_COUNT: usize = 256;
const RAM_SIZE: usize = 1 << 16;

/// Memory bus trait for the dispatcher to read/write bytes.
///
/// # Design
///
/// - `read(&self)`: Immutable reference allows shared reads
/// - `write(&mut self)`: Mutable reference makes side effects explicit
/// - No error types: every address is valid and every access succeeds
///
/// # Examples
///
/// ```
/// use sim6502::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],
///     rom: [u8; 0x8000],
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///     }
/// }
///
/// let mut mem = RomRamMemory { ram: [0; 0x8000], rom: [0xEA; 0x8000] };
/// mem.write(0x8000, 0x00);
/// assert_eq!(mem.read(0x8000), 0xEA);
/// assert_eq!(mem.read16(0xFFFE), 0xEAEA);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian word as two byte reads.
    ///
    /// The high byte comes from `addr + 1`, wrapping from 0xFFFF to 0x0000.
    fn read16(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Writes a little-endian word as two byte writes (low byte first).
    fn write16(&mut self, addr: u16, value: u16) {
        self.write(addr, (value & 0xFF) as u8);
        self.write(addr.wrapping_add(1), (value >> 8) as u8);
    }
}

/// A memory-mapped peripheral.
///
/// Devices receive the full bus address, so a device bound to several pages
/// can tell them apart. Both calls take `&mut self`: reading a device
/// register is allowed to have side effects (clearing a status bit,
/// counting accesses).
///
/// Device callbacks must not reenter the `Bus` they are mapped on.
///
/// # Examples
///
/// ```
/// use sim6502::Device;
///
/// struct Latch {
///     value: u8,
/// }
///
/// impl Device for Latch {
///     fn read(&mut self, _addr: u16) -> u8 {
///         self.value
///     }
///
///     fn write(&mut self, _addr: u16, value: u8) {
///         self.value = value;
///     }
/// }
/// ```
pub trait Device {
    /// Reads the byte the device presents at `addr`.
    fn read(&mut self, addr: u16) -> u8;

    /// Delivers a write to `addr`.
    fn write(&mut self, addr: u16, value: u8);
}

/// Shared handle to a mapped device.
///
/// The bus only observes devices; the host keeps its own clone of the handle
/// to inspect or drive the device between instructions.
pub type DeviceHandle = Rc<RefCell<dyn Device>>;

/// Flat 64KB RAM with per-page device overrides.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use sim6502::{Bus, Device, MemoryBus};
///
/// struct Constant(u8);
///
/// impl Device for Constant {
///     fn read(&mut self, _addr: u16) -> u8 {
///         self.0
///     }
///     fn write(&mut self, _addr: u16, _value: u8) {}
/// }
///
/// let mut bus = Bus::new();
/// bus.map(0xC0, Rc::new(RefCell::new(Constant(0xAB))));
///
/// // Reads on page 0xC0 go to the device
/// assert_eq!(bus.read(0xC012), 0xAB);
///
/// // The raw accessor bypasses it
/// bus[0xC012] = 0x55;
/// assert_eq!(bus[0xC012], 0x55);
/// assert_eq!(bus.read(0xC012), 0xAB);
/// ```
pub struct Bus {
    /// Backing RAM for unmapped pages (and raw access to every page)
    ram: Box<[u8; RAM_SIZE]>,

    /// Device bound to each page, if any
    pages: [Option<DeviceHandle>; PAGE_COUNT],
}

impl Bus {
    /// Creates a bus with zeroed RAM and no devices mapped.
    pub fn new() -> Self {
        Self {
            ram: Box::new([0; RAM_SIZE]),
            pages: std::array::from_fn(|_| None),
        }
    }

    /// Binds `device` to a single page, replacing any previous binding.
    pub fn map(&mut self, page: u8, device: DeviceHandle) {
        log::debug!("mapping device on page ${:02X}", page);
        self.pages[page as usize] = Some(device);
    }

    /// Binds `device` to every page from `page_start` to `page_end` inclusive.
    ///
    /// An inverted range maps nothing.
    pub fn map_range(&mut self, page_start: u8, page_end: u8, device: DeviceHandle) {
        if page_start > page_end {
            log::warn!(
                "ignoring inverted page range ${:02X}-${:02X}",
                page_start,
                page_end
            );
            return;
        }

        log::debug!(
            "mapping device on pages ${:02X}-${:02X}",
            page_start,
            page_end
        );
        for page in page_start..=page_end {
            self.pages[page as usize] = Some(Rc::clone(&device));
        }
    }

    /// Removes the binding for `page`, returning the device that was there.
    pub fn unmap(&mut self, page: u8) -> Option<DeviceHandle> {
        self.pages[page as usize].take()
    }

    /// Returns true if a device is bound to `page`.
    pub fn is_mapped(&self, page: u8) -> bool {
        self.pages[page as usize].is_some()
    }

    /// Zeroes RAM and drops every device binding.
    pub fn reset(&mut self) {
        log::info!("bus reset");
        self.ram.fill(0);
        self.pages.iter_mut().for_each(|page| *page = None);
    }

    /// Copies `bytes` into RAM starting at `addr`, bypassing devices.
    ///
    /// Wraps from 0xFFFF to 0x0000.
    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        for (i, &byte) in bytes.iter().enumerate() {
            self.ram[addr.wrapping_add(i as u16) as usize] = byte;
        }
    }

    /// The backing RAM array, without device dispatch.
    pub fn ram(&self) -> &[u8] {
        &self.ram[..]
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Bus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mapped: Vec<u8> = (0..=255u8).filter(|&page| self.is_mapped(page)).collect();
        f.debug_struct("Bus")
            .field("mapped_pages", &mapped)
            .finish_non_exhaustive()
    }
}

impl MemoryBus for Bus {
    #[inline]
    fn read(&self, addr: u16) -> u8 {
        match &self.pages[(addr >> 8) as usize] {
            Some(device) => device.borrow_mut().read(addr),
            None => self.ram[addr as usize],
        }
    }

    #[inline]
    fn write(&mut self, addr: u16, value: u8) {
        match &self.pages[(addr >> 8) as usize] {
            Some(device) => device.borrow_mut().write(addr, value),
            None => self.ram[addr as usize] = value,
        }
    }
}

/// Raw RAM access. Never dispatches to a device.
impl Index<u16> for Bus {
    type Output = u8;

    fn index(&self, addr: u16) -> &u8 {
        &self.ram[addr as usize]
    }
}

/// Raw RAM access. Never dispatches to a device.
impl IndexMut<u16> for Bus {
    fn index_mut(&mut self, addr: u16) -> &mut u8 {
        &mut self.ram[addr as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        reads: usize,
        writes: Vec<(u16, u8)>,
    }

    impl Device for Recorder {
        fn read(&mut self, addr: u16) -> u8 {
            self.reads += 1;
            (addr & 0xFF) as u8
        }

        fn write(&mut self, addr: u16, value: u8) {
            self.writes.push((addr, value));
        }
    }

    #[test]
    fn test_bus_read_write_ram() {
        let mut bus = Bus::new();

        assert_eq!(bus.read(0x0000), 0x00);
        assert_eq!(bus.read(0xFFFF), 0x00);

        bus.write(0x1234, 0x42);
        assert_eq!(bus.read(0x1234), 0x42);
        assert_eq!(bus[0x1234], 0x42);
        assert_eq!(bus.read(0x1233), 0x00);
        assert_eq!(bus.read(0x1235), 0x00);
    }

    #[test]
    fn test_word_access_is_little_endian() {
        let mut bus = Bus::new();

        bus.write16(0xFFFE, 0xCAFE);
        assert_eq!(bus[0xFFFE], 0xFE);
        assert_eq!(bus[0xFFFF], 0xCA);
        assert_eq!(bus.read16(0xFFFE), 0xCAFE);
    }

    #[test]
    fn test_word_access_wraps_at_top_of_memory() {
        let mut bus = Bus::new();

        bus.write16(0xFFFF, 0xBEEF);
        assert_eq!(bus[0xFFFF], 0xEF);
        assert_eq!(bus[0x0000], 0xBE);
        assert_eq!(bus.read16(0xFFFF), 0xBEEF);
    }

    #[test]
    fn test_mapped_page_receives_absolute_address() {
        let mut bus = Bus::new();
        let device = Rc::new(RefCell::new(Recorder::default()));
        bus.map(0xD0, device.clone());

        assert_eq!(bus.read(0xD07F), 0x7F);
        bus.write(0xD001, 0x99);

        assert_eq!(device.borrow().reads, 1);
        assert_eq!(device.borrow().writes, vec![(0xD001, 0x99)]);
        assert_eq!(bus[0xD001], 0x00);
    }

    #[test]
    fn test_inverted_range_maps_nothing() {
        let mut bus = Bus::new();
        let device = Rc::new(RefCell::new(Recorder::default()));
        bus.map_range(0x20, 0x10, device);

        assert!((0..=255u8).all(|page| !bus.is_mapped(page)));
    }

    #[test]
    fn test_unmap_restores_ram() {
        let mut bus = Bus::new();
        let device = Rc::new(RefCell::new(Recorder::default()));
        bus.map(0x80, device);
        bus[0x8010] = 0x5A;

        assert_eq!(bus.read(0x8010), 0x10);
        assert!(bus.unmap(0x80).is_some());
        assert!(!bus.is_mapped(0x80));
        assert_eq!(bus.read(0x8010), 0x5A);
    }

    #[test]
    fn test_load_wraps_and_bypasses_devices() {
        let mut bus = Bus::new();
        let device = Rc::new(RefCell::new(Recorder::default()));
        bus.map(0x00, device.clone());

        bus.load(0xFFFE, &[1, 2, 3]);
        assert_eq!(bus[0xFFFE], 1);
        assert_eq!(bus[0xFFFF], 2);
        assert_eq!(bus[0x0000], 3);
        assert!(device.borrow().writes.is_empty());
    }
}
