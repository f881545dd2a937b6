//! Demo data loaded at session start

use chrono::NaiveDateTime;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::LaptopStatus,
        laptop::CreateLaptop,
        reservation::CreateReservation,
    },
    services::Services,
};

struct DemoLaptop {
    computer_name: &'static str,
    cpu: &'static str,
    ram: &'static str,
    gpu: &'static str,
    software_version: &'static str,
    status: LaptopStatus,
}

const DEMO_LAPTOPS: &[DemoLaptop] = &[
    DemoLaptop {
        computer_name: "Laptop-001",
        cpu: "Intel i7",
        ram: "16GB",
        gpu: "NVIDIA RTX 3060",
        software_version: "Windows 11",
        status: LaptopStatus::Available,
    },
    DemoLaptop {
        computer_name: "Laptop-002",
        cpu: "AMD Ryzen 9",
        ram: "32GB",
        gpu: "NVIDIA RTX 4080",
        software_version: "Windows 11",
        status: LaptopStatus::InReview,
    },
];

struct DemoReservation {
    laptop_id: &'static str,
    user_id: &'static str,
    start: &'static str,
    end: &'static str,
    quantity: u32,
    description: &'static str,
}

const DEMO_RESERVATIONS: &[DemoReservation] = &[
    DemoReservation {
        laptop_id: "Laptop-001",
        user_id: "user1",
        start: "2024-03-20 12:00",
        end: "2024-03-20 14:00",
        quantity: 10,
        description: "We need these laptops for a language class and would like Duolingo installed.",
    },
    DemoReservation {
        laptop_id: "Laptop-002",
        user_id: "user2",
        start: "2024-03-22 09:00",
        end: "2024-03-22 16:00",
        quantity: 15,
        description: "Programming class for beginners. Visual Studio Code must be installed.",
    },
];

fn parse_slot(value: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M")
        .map_err(|e| AppError::validation(format!("Invalid date/time '{}': {}", value, e)))
}

/// Load the demo laptops and pending reservations into `services`
pub fn seed_demo_data(services: &mut Services) -> AppResult<()> {
    for demo in DEMO_LAPTOPS {
        let laptop = services.laptops.create(&CreateLaptop {
            computer_name: demo.computer_name.to_string(),
            cpu: demo.cpu.to_string(),
            ram: demo.ram.to_string(),
            gpu: demo.gpu.to_string(),
            software_version: demo.software_version.to_string(),
        });
        if laptop.status != demo.status {
            services.laptops.change_status(laptop.id, demo.status)?;
        }
    }

    for demo in DEMO_RESERVATIONS {
        services.reservations.create(&CreateReservation {
            laptop_id: demo.laptop_id.to_string(),
            user_id: demo.user_id.to_string(),
            start: parse_slot(demo.start)?,
            end: parse_slot(demo.end)?,
            quantity: demo.quantity,
            description: demo.description.to_string(),
        })?;
    }

    tracing::info!(
        "Demo data loaded: {} laptops, {} reservations",
        DEMO_LAPTOPS.len(),
        DEMO_RESERVATIONS.len()
    );
    Ok(())
}
