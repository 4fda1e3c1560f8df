//! Local List Patches
//!
//! In-place updates applied to fetched lists after a successful write.

use crate::models::{Car, Parking, Person, Spot, Subscription};

/// Insert `item` and re-sort `list` by `key`. The fetched list may arrive
/// in backend order, so the whole list is sorted (stable for equal keys).
pub fn insert_sorted_by<T, K, F>(list: &mut Vec<T>, item: T, key: F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    list.push(item);
    list.sort_by_key(key);
}

/// Sort key for display names; case-insensitive
pub fn display_key(value: &str) -> String {
    value.to_lowercase()
}

pub fn insert_parking(list: &mut Vec<Parking>, parking: Parking) {
    insert_sorted_by(list, parking, |p| display_key(&p.name));
}

pub fn insert_car(list: &mut Vec<Car>, car: Car) {
    insert_sorted_by(list, car, |c| c.license_plate.clone());
}

pub fn insert_person(list: &mut Vec<Person>, person: Person) {
    insert_sorted_by(list, person, |p| display_key(&p.first_name));
}

pub fn insert_subscription(list: &mut Vec<Subscription>, subscription: Subscription) {
    insert_sorted_by(list, subscription, |s| s.spot_tag().to_string());
}

/// Remove the entry with `id`; returns whether something was removed
pub fn remove_by_id<T, F>(list: &mut Vec<T>, id: &str, id_of: F) -> bool
where
    F: Fn(&T) -> &str,
{
    let before = list.len();
    list.retain(|item| id_of(item) != id);
    list.len() != before
}

/// Action offered by a spot row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpotAction {
    Park,
    Unpark,
}

impl SpotAction {
    pub fn for_spot(spot: &Spot) -> Self {
        if spot.is_taken {
            SpotAction::Unpark
        } else {
            SpotAction::Park
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SpotAction::Park => "Park a car",
            SpotAction::Unpark => "Remove the car",
        }
    }
}

/// Mark `spot_id` as occupied by `car`
pub fn apply_park(spots: &mut [Spot], spot_id: &str, car: String) -> bool {
    match spots.iter_mut().find(|s| s.id == spot_id) {
        Some(spot) => {
            spot.car = Some(car);
            spot.is_taken = true;
            true
        }
        None => false,
    }
}

/// Mark `spot_id` as free
pub fn apply_unpark(spots: &mut [Spot], spot_id: &str) -> bool {
    match spots.iter_mut().find(|s| s.id == spot_id) {
        Some(spot) => {
            spot.car = None;
            spot.is_taken = false;
            true
        }
        None => false,
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::models::*;

    pub fn parking(id: &str, name: &str) -> Parking {
        Parking {
            id: id.to_string(),
            name: name.to_string(),
            address: format!("{} avenue", name),
            city: "Paris".to_string(),
            zip_code: "75008".to_string(),
            levels: 2,
            spots_per_level: 10,
            available_spots: 5,
            spots: vec![],
            subscriptions: vec![],
        }
    }

    pub fn person(id: &str, first: &str, last: &str, birth: &str) -> Person {
        Person {
            id: id.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            birth_date: birth.to_string(),
            cars: vec![],
            subscriptions: vec![],
        }
    }

    pub fn car(id: &str, plate: &str, brand: &str) -> Car {
        Car {
            id: id.to_string(),
            license_plate: plate.to_string(),
            brand: brand.to_string(),
            model: "Clio".to_string(),
            color: "Blanc".to_string(),
            owner: Ref::Id("p1".to_string()),
            spot: None,
            parking: None,
            bad_parked: false,
        }
    }

    pub fn spot(id: &str, tag: &str, car: Option<&str>) -> Spot {
        Spot {
            id: id.to_string(),
            level: 0,
            spot: 0,
            tag: tag.to_string(),
            car: car.map(str::to_string),
            is_taken: car.is_some(),
            subscription: None,
            parking: Some("k1".to_string()),
        }
    }

    pub fn subscription(id: &str, tag: &str, first: &str) -> Subscription {
        Subscription {
            id: id.to_string(),
            person: Ref::Expanded(PersonSummary {
                id: format!("p-{}", id),
                first_name: first.to_string(),
                last_name: "Martin".to_string(),
            }),
            spot: Ref::Expanded(SpotSummary {
                id: format!("s-{}", id),
                tag: tag.to_string(),
                level: Some(0),
            }),
            parking: Some("k1".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_taken_spot_offers_unpark_and_unpark_frees_it() {
        let mut spots = vec![spot("s1", "A-01", Some("AB123CD")), spot("s2", "A-02", None)];
        assert_eq!(SpotAction::for_spot(&spots[0]), SpotAction::Unpark);
        assert_eq!(SpotAction::for_spot(&spots[1]), SpotAction::Park);

        assert!(apply_unpark(&mut spots, "s1"));
        assert_eq!(spots[0].car, None);
        assert!(!spots[0].is_taken);
        assert_eq!(SpotAction::for_spot(&spots[0]), SpotAction::Park);
    }

    #[test]
    fn test_park_patches_only_target_spot() {
        let mut spots = vec![spot("s1", "A-01", None), spot("s2", "A-02", None)];
        assert!(apply_park(&mut spots, "s2", "EF456GH".to_string()));
        assert_eq!(spots[1].car.as_deref(), Some("EF456GH"));
        assert!(spots[1].is_taken);
        assert!(!spots[0].is_taken);
        assert!(!apply_park(&mut spots, "missing", "XX000XX".to_string()));
    }

    #[test]
    fn test_insert_keeps_display_order() {
        let mut parkings = vec![parking("1", "Alpha"), parking("2", "Gamma")];
        insert_parking(&mut parkings, parking("3", "beta"));
        let names: Vec<_> = parkings.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "beta", "Gamma"]);

        let mut cars = vec![car("1", "AA111AA", "Renault"), car("2", "CC333CC", "Peugeot")];
        insert_car(&mut cars, car("3", "BB222BB", "Citroen"));
        assert_eq!(cars[1].license_plate, "BB222BB");

        let mut subs = vec![subscription("1", "A-01", "Luc"), subscription("2", "A-03", "Eva")];
        insert_subscription(&mut subs, subscription("3", "A-02", "Noa"));
        assert_eq!(subs[1].spot_tag(), "A-02");
    }

    #[test]
    fn test_insert_sorts_unsorted_list() {
        let mut parkings = vec![parking("1", "Zeta"), parking("2", "Alpha"), parking("3", "Mid")];
        insert_parking(&mut parkings, parking("4", "Beta"));
        let names: Vec<_> = parkings.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "Beta", "Mid", "Zeta"]);

        let mut persons = vec![
            person("p1", "zoe", "Martin", "1990-01-01"),
            person("p2", "Ada", "Lovelace", "1815-12-10"),
        ];
        insert_person(&mut persons, person("p3", "Leo", "Durand", "1985-05-05"));
        let firsts: Vec<_> = persons.iter().map(|p| p.first_name.as_str()).collect();
        assert_eq!(firsts, ["Ada", "Leo", "zoe"]);
    }

    #[test]
    fn test_remove_by_id() {
        let mut persons = vec![
            person("p1", "Ada", "Lovelace", "1815-12-10"),
            person("p2", "Alan", "Turing", "1912-06-23"),
        ];
        assert!(remove_by_id(&mut persons, "p1", |p| p.id.as_str()));
        assert!(!remove_by_id(&mut persons, "p1", |p| p.id.as_str()));
        assert_eq!(persons.len(), 1);
    }
}
