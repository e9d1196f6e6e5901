use workout_stats::{Package, WorkoutError, read_package};

#[test]
fn reference_packages_render() {
    let packages = [
        ("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        ("RUN", vec![15000.0, 1.0, 75.0]),
        ("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ];
    let lines: Vec<String> = packages
        .iter()
        .map(|(code, data)| read_package(code, data).unwrap().summary().render())
        .collect();

    assert_eq!(
        lines,
        vec![
            "Activity type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; Avg speed: 1.000 km/h; Calories burned: 336.000.",
            "Activity type: Running; Duration: 1.000 h.; Distance: 9.750 km; Avg speed: 9.750 km/h; Calories burned: 699.750.",
            "Activity type: SportsWalking; Duration: 1.000 h.; Distance: 5.850 km; Avg speed: 5.850 km/h; Calories burned: 157.500.",
        ]
    );
}

#[test]
fn unknown_code_fails() {
    let res = read_package("XYZ", &[1.0, 2.0, 3.0]);
    assert!(matches!(res, Err(WorkoutError::UnknownActivityCode(code)) if code == "XYZ"));
}

#[test]
fn rendered_numbers_always_have_three_fraction_digits() {
    let packages = [
        Package::new("RUN", vec![1.0, 3.0, 61.3]),
        Package::new("WLK", vec![123457.0, 2.5, 90.25, 171.0]),
        Package::new("SWM", vec![3.0, 0.25, 55.0, 50.0, 2.5]),
    ];
    for package in &packages {
        let msg = package.read().unwrap().summary();
        for value in [msg.duration, msg.distance, msg.speed, msg.calories] {
            let shown = format!("{value:.3}");
            let (_, fraction) = shown.split_once('.').unwrap();
            assert_eq!(fraction.len(), 3);
            assert!(msg.render().contains(&shown));
        }
    }
}

#[test]
fn batch_file_round_trip_through_serde() {
    let raw = r#"[
        {"workout_type": "SWM", "data": [720, 1, 80, 25, 40]},
        {"workout_type": "RUN", "data": [15000, 1, 75]}
    ]"#;
    let packages: Vec<Package> = serde_json::from_str(raw).unwrap();
    let labels: Vec<&str> = packages.iter().map(|p| p.read().unwrap().label()).collect();
    assert_eq!(labels, vec!["Swimming", "Running"]);
}
