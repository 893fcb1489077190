use std::fs;

use rental_desk::config::{resolve_config_path, DeskConfig, CONFIG_ENV};
use rental_desk::models::Vehicle;
use rental_desk::Fleet;
use rust_decimal::Decimal;
use speculate2::speculate;
use tempfile::TempDir;

speculate! {
    before {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("rental-desk").join("config.json");
    }

    describe "load_from" {
        it "returns defaults when the file is missing" {
            let config = DeskConfig::load_from(&path).expect("Load failed");
            assert_eq!(config, DeskConfig::default());
            assert_eq!(config.currency_symbol, "$");
            assert!(config.fleet.is_empty());
        }

        it "reads the currency and seed fleet" {
            fs::create_dir_all(path.parent().expect("No parent")).expect("Failed to create dir");
            fs::write(&path, r#"{
                "currency_symbol": "€",
                "fleet": [
                    { "make": "Toyota", "model": "Corolla", "registration_number": "REG1", "price_per_day": "30.00" },
                    { "make": "Honda", "model": "Civic", "registration_number": "REG2", "price_per_day": 25 }
                ]
            }"#).expect("Failed to write config");

            let config = DeskConfig::load_from(&path).expect("Load failed");
            assert_eq!(config.currency_symbol, "€");
            assert_eq!(config.fleet.len(), 2);
            assert_eq!(config.fleet[0].price_per_day, Decimal::from(30));
            assert_eq!(config.fleet[1].price_per_day, Decimal::from(25));
        }

        it "fills in a missing currency" {
            fs::create_dir_all(path.parent().expect("No parent")).expect("Failed to create dir");
            fs::write(&path, r#"{ "fleet": [] }"#).expect("Failed to write config");

            let config = DeskConfig::load_from(&path).expect("Load failed");
            assert_eq!(config.currency_symbol, "$");
        }

        it "fails on malformed JSON" {
            fs::create_dir_all(path.parent().expect("No parent")).expect("Failed to create dir");
            fs::write(&path, "{ not json").expect("Failed to write config");

            let err = DeskConfig::load_from(&path).expect_err("Load should fail");
            assert!(err.to_string().contains("Failed to parse config file"));
        }
    }

    describe "seed rate bounds" {
        it "rejects a seed vehicle priced above the ceiling" {
            fs::create_dir_all(path.parent().expect("No parent")).expect("Failed to create dir");
            fs::write(&path, r#"{
                "fleet": [
                    { "make": "Toyota", "model": "Corolla", "registration_number": "REG1", "price_per_day": "79228162514264337593543950335" }
                ]
            }"#).expect("Failed to write config");

            let err = DeskConfig::load_from(&path).expect_err("Load should fail");
            assert!(format!("{:#}", err).contains("Invalid daily rate"));
            assert_eq!(DeskConfig::load(&path), DeskConfig::default());
        }
    }

    describe "load" {
        it "falls back to defaults on malformed JSON" {
            fs::create_dir_all(path.parent().expect("No parent")).expect("Failed to create dir");
            fs::write(&path, "[1, 2").expect("Failed to write config");

            assert_eq!(DeskConfig::load(&path), DeskConfig::default());
        }
    }

    describe "save_to" {
        it "writes a config that loads back into a fleet" {
            DeskConfig::sample().save_to(&path).expect("Save failed");

            let config = DeskConfig::load_from(&path).expect("Load failed");
            let fleet = Fleet::with_vehicles(config.fleet.into_iter().map(Vehicle::from));

            let vehicle = fleet.find_available_vehicle("toyota", "corolla").expect("Seed vehicle missing");
            assert_eq!(vehicle.registration_number(), "REG1");
            assert_eq!(vehicle.price_per_day(), Decimal::from(30));
        }
    }

    describe "resolve_config_path" {
        it "prefers the explicit path" {
            let resolved = resolve_config_path(Some(path.clone())).expect("Resolve failed");
            assert_eq!(resolved, path);
        }

        it "falls back to the environment variable" {
            std::env::set_var(CONFIG_ENV, &path);
            let resolved = resolve_config_path(None);
            std::env::remove_var(CONFIG_ENV);

            assert_eq!(resolved.expect("Resolve failed"), path);
        }
    }
}
