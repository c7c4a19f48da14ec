//! Read-only queries over the agency state. Every report is recomputed from
//! scratch on each call; grouped results come back as ordered `(key, values)`
//! sequences so the required sort order is explicit.

use std::collections::BTreeMap;

use renta_domain::{User, Vehicle};

use crate::agency::Agency;

impl Agency {
    /// Vehicles of one manufacturer (exact, case-sensitive match) as
    /// `model:year:color`, in ascending id order.
    pub fn vehicles_of_manufacturer(&self, manufacturer: &str) -> Vec<String> {
        // The fleet arena is already in id order
        self.vehicles
            .iter()
            .filter(|v| v.manufacturer == manufacturer)
            .map(|v| format!("{}:{}:{}", v.model, v.year, v.color))
            .collect()
    }

    /// Users grouped by city: cities ascending, names within a city in
    /// descending alphabetical order.
    pub fn user_info(&self) -> Vec<(String, Vec<String>)> {
        let mut by_city: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for user in &self.users {
            by_city.entry(&user.city).or_default().push(&user.name);
        }

        by_city
            .into_iter()
            .map(|(city, mut names)| {
                names.sort_by(|a, b| b.cmp(a));
                (
                    city.to_string(),
                    names.into_iter().map(str::to_string).collect(),
                )
            })
            .collect()
    }

    /// Names of users holding a reservation for a currently occupied vehicle
    /// of the given category, sorted alphabetically. A user appears once per
    /// matching reservation; names are not deduplicated.
    pub fn user_names_for_taken_cars(&self, category: char) -> Vec<String> {
        let mut names: Vec<String> = self
            .reservations
            .iter()
            .filter(|r| {
                let vehicle = &self.vehicles[r.vehicle_id];
                vehicle.category == category && !vehicle.is_available()
            })
            .map(|r| r.user_name.clone())
            .collect();
        names.sort();
        names
    }

    /// Available vehicles with at least `min_seats` seats, sorted by category
    /// then id, each as `{:>3} category:manufacturer:model` with the id
    /// right-aligned in a 3-character field.
    pub fn available_vehicles(&self, min_seats: u32) -> Vec<String> {
        let mut matching: Vec<&Vehicle> = self
            .vehicles
            .iter()
            .filter(|v| v.is_available() && v.seats >= min_seats)
            .collect();
        matching.sort_by_key(|v| (v.category, v.id));

        matching
            .into_iter()
            .map(|v| format!("{:>3} {}:{}:{}", v.id, v.category, v.manufacturer, v.model))
            .collect()
    }

    /// Users grouped by total accumulated points, highest total first. Users
    /// who never earned a point are left out; names within a group are in
    /// registration order.
    pub fn users_per_points(&self) -> Vec<(f64, Vec<String>)> {
        let mut groups: Vec<(f64, Vec<String>)> = Vec::new();
        for user in &self.users {
            if user.points.is_empty() {
                continue;
            }
            let total = user.total_points();
            match groups.iter_mut().find(|(points, _)| *points == total) {
                Some((_, names)) => names.push(user.name.clone()),
                None => groups.push((total, vec![user.name.clone()])),
            }
        }
        groups.sort_by(|a, b| b.0.total_cmp(&a.0));
        groups
    }

    /// Every user as `("id: name", average rental duration)`, longest average
    /// first, ties broken by name. Users without reservations average 0.
    pub fn evaluate_users(&self) -> Vec<(String, f64)> {
        let mut rows: Vec<(&User, f64)> = self
            .users
            .iter()
            .map(|u| (u, u.average_duration()))
            .collect();
        rows.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.name.cmp(&b.0.name)));

        rows.into_iter()
            .map(|(user, avg)| (format!("{}: {}", user.id, user.name), avg))
            .collect()
    }

    /// Every vehicle grouped by production year, newest year first, each as
    /// `manufacturer:model:color` in id order within the year.
    pub fn car_info_for_years(&self) -> Vec<(i32, Vec<String>)> {
        let mut by_year: BTreeMap<i32, Vec<String>> = BTreeMap::new();
        for vehicle in &self.vehicles {
            by_year.entry(vehicle.year).or_default().push(vehicle.info());
        }

        by_year.into_iter().rev().collect()
    }

    /// Category codes grouped by how many vehicles each category has, counts
    /// ascending. Defined categories with no vehicles are listed under 0;
    /// codes within a count stay in alphabetical order.
    pub fn categories_for_vehicle_number(&self) -> Vec<(usize, Vec<char>)> {
        let mut counts: BTreeMap<char, usize> =
            self.points.keys().map(|&category| (category, 0)).collect();
        for vehicle in &self.vehicles {
            *counts.entry(vehicle.category).or_insert(0) += 1;
        }

        let mut grouped: BTreeMap<usize, Vec<char>> = BTreeMap::new();
        for (category, count) in counts {
            // ascending category iteration keeps each group alphabetical
            grouped.entry(count).or_default().push(category);
        }

        grouped.into_iter().collect()
    }
}
