#![allow(dead_code)]

use std::path::PathBuf;

use massbalance_lib::{AircraftCatalog, AircraftProfile};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn fixture_catalog() -> AircraftCatalog {
    let path = fixtures_dir().join("aircraft.json");
    AircraftCatalog::from_path(&path).expect("load fixture aircraft.json")
}

pub fn hdlv() -> AircraftProfile {
    fixture_catalog()
        .get("F-HDLV")
        .expect("F-HDLV present in fixtures")
        .clone()
}

pub fn hdlt() -> AircraftProfile {
    fixture_catalog()
        .get("F-HDLT")
        .expect("F-HDLT present in fixtures")
        .clone()
}
