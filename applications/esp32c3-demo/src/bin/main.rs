//! Serial command console on the ESP32-C3 UART.
//!
//! Wires a `libconsole` console to UART0 and registers the access-point
//! configuration commands. Connect a serial terminal at 115200 baud and
//! type `help` (or anything unknown) to see the command listing.

#![no_std]
#![no_main]

use core::cell::Cell;

use critical_section::Mutex;
use esp_hal::main;
use esp_hal::uart::Uart;
use esp_println::println;
use libconsole::registry::Registry;
use libconsole::shell::Console;

esp_bootloader_esp_idf::esp_app_desc!();

#[panic_handler]
fn panic(_info: &core::panic::PanicInfo) -> ! {
    loop {}
}

static AP_ENABLED: Mutex<Cell<bool>> = Mutex::new(Cell::new(false));

fn set_access_point(enabled: i32) {
    let on = enabled != 0;
    critical_section::with(|cs| AP_ENABLED.borrow(cs).set(on));
    println!("access point {}", if on { "enabled" } else { "disabled" });
}

fn set_ssid(ssid: &str) {
    println!("ssid set to '{}'", ssid);
}

fn set_password(password: &str) {
    println!("password updated ({} characters)", password.len());
}

fn restart() {
    println!("restarting");
    esp_hal::system::software_reset();
}

struct ConsolePort<'a> {
    uart: Uart<'a, esp_hal::Blocking>,
}

impl libconsole::io::Read for ConsolePort<'_> {
    type Error = esp_hal::uart::Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.uart.read_buffered(buf)
    }
}

impl libconsole::io::Write for ConsolePort<'_> {
    type Error = esp_hal::uart::Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.uart.write(buf)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.uart.flush()
    }
}

#[main]
fn main() -> ! {
    let peripherals = esp_hal::init(esp_hal::Config::default());
    let uart = Uart::new(peripherals.UART0, esp_hal::uart::Config::default())
        .expect("UART0 init failed");

    let mut registry = Registry::new();
    registry
        .register_int("ap", "enable (1) or disable (0) the access point", set_access_point)
        .unwrap();
    registry
        .register_text("ssid", "set the access point SSID", set_ssid)
        .unwrap();
    registry
        .register_text("pass", "set the access point password", set_password)
        .unwrap();
    registry
        .register_no_arg("restart", "restart the device", restart)
        .unwrap();

    let mut console = Console::new();
    let mut port = ConsolePort { uart };

    loop {
        if console.poll(&mut port, &registry).is_err() {
            // UART glitches are transient; keep servicing the console.
        }
    }
}
