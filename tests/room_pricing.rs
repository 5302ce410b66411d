use classwork::rooms::{Amenity, Room, RoomClass, RoomDecorator, RoomExt, RoomOrder};
use classwork::students::{Student, StudentsList};
use tempfile::TempDir;

#[test]
fn luxury_with_every_amenity_stacked() {
    let room = RoomClass::Luxury
        .with(Amenity::Internet)
        .with(Amenity::Sofa)
        .with(Amenity::FoodDelivery)
        .with(Amenity::Breakfast)
        .with(Amenity::Dinner);

    assert_eq!(room.price(), 5200);
    assert_eq!(
        room.description(),
        "Люкс, выделенный Интернет, дополнительный диван, доставка еды в номер, \
         завтрак \"шведский стол\", ужин"
    );
}

#[test]
fn nested_constructors_match_builder() {
    let nested = RoomDecorator::new(
        Amenity::Breakfast,
        RoomDecorator::new(Amenity::Internet, RoomClass::Standard),
    );
    let built = RoomOrder::new(RoomClass::Standard)
        .with(Amenity::Internet)
        .with(Amenity::Breakfast)
        .build();

    assert_eq!(nested.description(), built.description());
    assert_eq!(nested.price(), built.price());
}

#[test]
fn chains_of_mixed_types_in_one_collection() {
    let rooms: Vec<Box<dyn Room>> = vec![
        Box::new(RoomClass::Economy),
        Box::new(RoomClass::Economy.with(Amenity::Breakfast)),
        Box::new(
            RoomClass::Economy
                .with(Amenity::Breakfast)
                .with(Amenity::Dinner),
        ),
    ];
    let prices: Vec<u32> = rooms.iter().map(|room| room.price()).collect();
    assert_eq!(prices, vec![1000, 1500, 2300]);
    assert!(rooms.iter().all(|room| room.description().starts_with("Эконом")));
}

#[test]
fn roster_survives_store_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("students.db");

    let mut list = StudentsList::new();
    list.add(Student::new("Бикчурин", "Эльмир", "ФМиИТ", 3, "301"));
    list.add(
        Student::new("Иванов", "Иван", "ФМиИТ", 3, "301")
            .with_surname("Сидоров")
            .with_course(4),
    );
    list.store_to(&path).unwrap();

    let mut loaded = StudentsList::new();
    loaded.load_from(&path).unwrap();
    assert_eq!(loaded.count(), 2);
    assert_eq!(loaded.get(1).map(|s| s.surname.as_str()), Some("Сидоров"));
    assert_eq!(loaded, list);
}
