#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at a scratch directory so the
/// user's real configuration is never read or written.
pub fn rcg() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("rcalgrab_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rcalgrab");
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rcalgrab.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a temp input file and return its path
pub fn temp_input(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_input.txt", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write input file");
    p
}

pub const DINNER: &str = "Dinner at Chez Panisse\nJanuary 15, 2026\n7:00 PM - 9:00 PM\nLocation: 1517 Shattuck Ave, Berkeley, CA 94709";

pub const ITINERARY: &str = "JetBlue
Confirmation code: ABCDEF
Sun, Feb 8
BOS → SXM Flight 1977
10:00 AM - 3:30 PM
Departs Terminal C, Boston Logan International Airport
Arrives Princess Juliana International Airport
Seat 12A, Economy, 1 checked bag included in fare
Sat, Feb 14
SXM → BOS Flight 1978
4:15 PM - 8:45 PM
";

pub const HOTEL: &str = "LA SAMANNA
Booking confirmation
Guest name: Jane Doe
CHECK IN
SUNDAY 08 FEB 2026
CHECK OUT
SATURDAY 14 FEB 2026
Check-in time: 3:00 PM
Located on St. Martin, French West Indies
Confirmation number: LS123456
";
