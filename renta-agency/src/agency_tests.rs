//! End-to-end scenarios exercising the full agency surface.

use crate::{Agency, VehicleStatus};

fn agency_with_points() -> Agency {
    let mut agency = Agency::new();
    agency.define_points(&[1.0, 2.0, 3.0]).unwrap();
    agency
}

#[test]
fn test_reservation_prefers_most_recent_vehicle() {
    // Two identical category A vehicles; the one registered last must win,
    // not the first one.
    let mut agency = agency_with_points();
    agency
        .add_car("Fiat", "Panda", 2019, "manual", "red", 'A', 4)
        .unwrap();
    agency
        .add_car("Fiat", "Panda", 2020, "manual", "blue", 'A', 4)
        .unwrap();
    let uid = agency.register_user("Marco", "Turin").unwrap();

    let reserved = agency.make_reservation(uid, 'A', 4, 3).unwrap();

    assert_eq!(reserved, Some(1));
    assert_eq!(agency.vehicles[1].status, VehicleStatus::Occupied);
    assert_eq!(agency.vehicles[0].status, VehicleStatus::Available);

    // The remaining vehicle is picked next; after that nothing matches
    assert_eq!(agency.make_reservation(uid, 'A', 4, 2).unwrap(), Some(0));
    assert_eq!(agency.make_reservation(uid, 'A', 4, 2).unwrap(), None);
}

#[test]
fn test_average_duration_follows_reservations() {
    let mut agency = agency_with_points();
    agency
        .add_car("Fiat", "Panda", 2019, "manual", "red", 'A', 4)
        .unwrap();
    agency
        .add_car("Fiat", "500", 2020, "manual", "white", 'A', 4)
        .unwrap();
    let uid = agency.register_user("Marco", "Turin").unwrap();

    agency.make_reservation(uid, 'A', 2, 3).unwrap();
    assert_eq!(agency.evaluate_users(), vec![("0: Marco".to_string(), 3.0)]);

    agency.make_reservation(uid, 'A', 2, 5).unwrap();
    assert_eq!(agency.evaluate_users(), vec![("0: Marco".to_string(), 4.0)]);
}

#[test]
fn test_failed_reservation_leaves_state_untouched() {
    let mut agency = agency_with_points();
    agency
        .add_car("Fiat", "Panda", 2019, "manual", "red", 'A', 4)
        .unwrap();
    let uid = agency.register_user("Marco", "Turin").unwrap();

    assert!(agency.make_reservation(uid, 'Z', 2, 3).is_err());
    assert!(agency.make_reservation(42, 'A', 2, 3).is_err());

    assert_eq!(agency.vehicles[0].status, VehicleStatus::Available);
    assert!(agency.reservations.is_empty());
    assert!(agency.users[uid].reservations.is_empty());
    assert_eq!(agency.users[uid].total_points(), 0.0);
}

#[test]
fn test_reports_are_idempotent() {
    let mut agency = agency_with_points();
    agency
        .add_car("Fiat", "Panda", 2019, "manual", "red", 'A', 4)
        .unwrap();
    agency
        .add_van("Ford", "Transit", 2020, "manual", "white", 'B', 9, 800)
        .unwrap();
    let marco = agency.register_user("Marco", "Turin").unwrap();
    agency.register_user("Anna", "Milan").unwrap();
    agency.make_reservation(marco, 'B', 4, 7).unwrap();

    assert_eq!(agency.available_vehicles(0), agency.available_vehicles(0));
    assert_eq!(agency.user_info(), agency.user_info());
    assert_eq!(agency.users_per_points(), agency.users_per_points());
    assert_eq!(agency.evaluate_users(), agency.evaluate_users());
    assert_eq!(agency.car_info_for_years(), agency.car_info_for_years());
    assert_eq!(
        agency.categories_for_vehicle_number(),
        agency.categories_for_vehicle_number()
    );
}

#[test]
fn test_full_rental_scenario() {
    let mut agency = agency_with_points();

    agency
        .add_car("Fiat", "Panda", 2018, "manual", "red", 'A', 4)
        .unwrap();
    agency
        .add_car("Skoda", "Octavia", 2021, "automatic", "grey", 'B', 5)
        .unwrap();
    agency
        .add_van("Ford", "Transit", 2020, "manual", "white", 'C', 9, 800)
        .unwrap();
    agency
        .add_car("Skoda", "Fabia", 2021, "manual", "blue", 'A', 5)
        .unwrap();

    let marco = agency.register_user("Marco", "Turin").unwrap();
    let anna = agency.register_user("Anna", "Milan").unwrap();
    assert_eq!(agency.count_users(), 2);

    // Marco takes the newer of the two A vehicles, Anna the van
    assert_eq!(agency.make_reservation(marco, 'A', 4, 2).unwrap(), Some(3));
    assert_eq!(agency.make_reservation(anna, 'C', 6, 5).unwrap(), Some(2));

    assert_eq!(
        agency.available_vehicles(0),
        vec!["  0 A:Fiat:Panda", "  1 B:Skoda:Octavia"]
    );
    assert_eq!(agency.user_names_for_taken_cars('A'), vec!["Marco"]);
    assert_eq!(
        agency.vehicles_of_manufacturer("Skoda"),
        vec!["Octavia:2021:grey", "Fabia:2021:blue"]
    );
    assert_eq!(
        agency.users_per_points(),
        vec![
            (3.0, vec!["Anna".to_string()]),
            (1.0, vec!["Marco".to_string()]),
        ]
    );
    assert_eq!(
        agency.evaluate_users(),
        vec![
            ("1: Anna".to_string(), 5.0),
            ("0: Marco".to_string(), 2.0),
        ]
    );
    assert_eq!(
        agency.car_info_for_years(),
        vec![
            (
                2021,
                vec![
                    "Skoda:Octavia:grey".to_string(),
                    "Skoda:Fabia:blue".to_string()
                ]
            ),
            (2020, vec!["Ford:Transit:white".to_string()]),
            (2018, vec!["Fiat:Panda:red".to_string()]),
        ]
    );
    assert_eq!(
        agency.categories_for_vehicle_number(),
        vec![(1, vec!['B', 'C']), (2, vec!['A'])]
    );
}
