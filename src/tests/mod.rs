#![cfg(test)]

use core::f64::consts::{PI, TAU};

use glam::DVec3;

use crate::{
    body_presets,
    resolver::{local_position, position_at_eccentric_anomaly, position_at_true_anomaly},
    solvers::{mean_anomaly, true_anomaly_at_eccentric_anomaly},
    solve_eccentric_anomaly, solve_true_anomaly, solve_true_anomaly_with, BodyRecord, BodyTable,
    ConfigurationError, Date, ElementsError, JulianDay, OrbitalElements, QueryError,
    SolverOptions,
};

const RANDOM_CASES: usize = 500;


use assertions::*;
use seeders::*;

fn elements(a: f64, e: f64, i: f64, l: f64, p: f64, n: f64) -> OrbitalElements {
    OrbitalElements::new(a, e, i, l, p, n).unwrap()
}

fn earth_like() -> OrbitalElements {
    elements(149.6, 0.0167, 0.0, 100.46646, 102.9, 0.9856)
}

/// A planet sitting at (100, 0, 0) at J2000 with a moon at (5, 0, 0) from it.
fn planet_and_moon() -> BodyTable {
    BodyTable::from_records([
        BodyRecord::root("Star"),
        BodyRecord::orbiting(
            "Planet",
            Some("Star"),
            elements(100.0, 0.0, 0.0, 0.0, 0.0, 1.0),
        ),
        BodyRecord::orbiting(
            "Moon",
            Some("Planet"),
            elements(5.0, 0.0, 0.0, 0.0, 0.0, 12.0),
        ),
    ])
    .unwrap()
}

// Kepler solver

#[test]
fn circular_true_anomaly_is_mean_anomaly() {
    for _ in 0..RANDOM_CASES {
        let elements = random_circular();
        let date = random_date();

        let mean = mean_anomaly(&elements, date);
        let true_anomaly = solve_true_anomaly(&elements, date).unwrap();

        assert_almost_eq_angle(
            true_anomaly,
            mean,
            &format!("true vs mean anomaly of {elements:?} on {date}"),
        );
    }
}

#[test]
fn circular_solver_takes_no_steps() {
    let options = SolverOptions::default().with_max_iterations(0);

    for i in 0..360 {
        let mean = (i as f64).to_radians();
        assert_eq!(solve_eccentric_anomaly(0.0, mean, &options), Ok(mean));
    }
}

#[test]
fn solver_residual_below_tolerance() {
    let options = SolverOptions::default();

    for e_step in 0..90 {
        let eccentricity = e_step as f64 / 100.0;

        for m_step in 0..720 {
            let mean = m_step as f64 / 720.0 * TAU;
            let ecc_anom = solve_eccentric_anomaly(eccentricity, mean, &options)
                .unwrap_or_else(|err| panic!("e = {eccentricity}, M = {mean}: {err}"));

            let residual = ecc_anom - eccentricity * ecc_anom.sin() - mean;
            assert!(
                residual.abs() < options.tolerance,
                "residual {residual} for e = {eccentricity}, M = {mean}"
            );
        }
    }
}

#[test]
fn solver_reports_exhausted_iterations() {
    let options = SolverOptions::default()
        .with_tolerance(0.0)
        .with_max_iterations(7);

    let err = solve_eccentric_anomaly(0.5, 1.0, &options).unwrap_err();

    assert_eq!(err.iterations, 7);
    assert_eq!(err.eccentricity, 0.5);
    assert_eq!(err.mean_anomaly, 1.0);
    assert!(err.residual.is_finite());
}

#[test]
fn solver_failure_is_not_a_warning() {
    logging::install();
    let debug_before = logging::debug_records();

    let options = SolverOptions::default().with_max_iterations(0);
    for _ in 0..10 {
        assert!(solve_eccentric_anomaly(0.7, 2.0, &options).is_err());
    }

    assert!(logging::debug_records() >= debug_before + 10);
    assert_eq!(logging::warnings(), 0);
}

#[test]
fn solver_with_zero_iterations_fails_off_periapsis() {
    let options = SolverOptions::default().with_max_iterations(0);
    let err = solve_eccentric_anomaly(0.3, 2.0, &options).unwrap_err();

    assert_eq!(err.iterations, 0);
    assert_almost_eq(err.residual, -0.3 * 2f64.sin(), "initial residual");
}

#[test]
fn solver_rejects_nan() {
    let err = solve_eccentric_anomaly(0.1, f64::NAN, &SolverOptions::default()).unwrap_err();
    assert_eq!(err.iterations, 0);
    assert!(err.residual.is_nan());
}

#[test]
fn solver_terminates_near_parabolic() {
    // Newton's method from E = M oscillates for a long time at some mean
    // anomalies when e is this close to 1. Every call must still return.
    let options = SolverOptions::default();
    let mut failures = 0;

    for m_step in 1..2000 {
        let mean = m_step as f64 / 2000.0 * TAU;

        match solve_eccentric_anomaly(0.999, mean, &options) {
            Ok(ecc_anom) => {
                let residual = ecc_anom - 0.999 * ecc_anom.sin() - mean;
                assert!(residual.abs() < options.tolerance);
            }
            Err(err) => {
                assert_eq!(err.iterations, options.max_iterations);
                failures += 1;
            }
        }
    }

    assert!(failures > 0, "expected some mean anomalies not to converge");
}

#[test]
fn relaxed_options_recover() {
    let options = SolverOptions::default().with_max_iterations(2);
    let elements = elements(1.0, 0.8, 0.0, 123.0, 0.0, 1.0);

    assert!(solve_true_anomaly_with(&elements, JulianDay::J2000, &options).is_err());

    let relaxed = options.with_max_iterations(100);
    assert!(solve_true_anomaly_with(&elements, JulianDay::J2000, &relaxed).is_ok());
}

#[test]
fn mean_anomaly_range() {
    for _ in 0..RANDOM_CASES {
        let elements = random_elliptic();
        let mean = mean_anomaly(&elements, random_date());
        assert!((0.0..TAU).contains(&mean), "mean anomaly {mean}");
    }

    // Exactly one turn before the epoch
    let elements = elements(1.0, 0.0, 0.0, 0.0, 0.0, 1.0);
    assert_eq!(mean_anomaly(&elements, JulianDay(2451545.0 - 360.0)), 0.0);
}

#[test]
fn mean_anomaly_at_epoch() {
    let elements = elements(1.0, 0.2, 0.0, 100.0, 30.0, 5.0);
    assert_almost_eq(
        mean_anomaly(&elements, JulianDay::J2000),
        70f64.to_radians(),
        "mean anomaly at J2000",
    );
    assert_almost_eq(
        mean_anomaly(&elements, JulianDay(2451545.0 + 100.0)),
        210f64.to_radians(),
        "mean anomaly 100 days after J2000",
    );
}

#[test]
fn true_anomaly_range() {
    for _ in 0..RANDOM_CASES {
        let elements = random_elliptic();
        let true_anomaly = solve_true_anomaly(&elements, random_date()).unwrap();
        assert!(
            true_anomaly > -PI && true_anomaly <= PI,
            "true anomaly {true_anomaly}"
        );
    }
}

#[test]
fn true_anomaly_at_apsides() {
    for e in [0.0, 0.1, 0.5, 0.9] {
        assert_eq!(true_anomaly_at_eccentric_anomaly(e, 0.0), 0.0);
        assert_almost_eq(true_anomaly_at_eccentric_anomaly(e, PI), PI, "apoapsis");
    }

    // Past periapsis, the true anomaly runs ahead of the eccentric anomaly
    for e in [0.1, 0.5, 0.9] {
        assert!(true_anomaly_at_eccentric_anomaly(e, 1.0) > 1.0);
        assert!(true_anomaly_at_eccentric_anomaly(e, -1.0) < -1.0);
    }
}

// Geometry

#[test]
fn radius_bounds() {
    for _ in 0..RANDOM_CASES {
        let elements = random_elliptic();
        let a = elements.semi_major_axis();
        let e = elements.eccentricity();

        assert_almost_eq_within(
            elements.radius_at_true_anomaly(0.0),
            a * (1.0 - e),
            1e-9 * a,
            "radius at periapsis",
        );
        assert_almost_eq_within(
            elements.radius_at_true_anomaly(PI),
            a * (1.0 + e),
            1e-9 * a,
            "radius at apoapsis",
        );

        for step in 0..64 {
            let angle = step as f64 / 64.0 * TAU;
            let radius = elements.radius_at_true_anomaly(angle);
            assert!(radius >= elements.periapsis_distance() * (1.0 - 1e-12));
            assert!(radius <= elements.apoapsis_distance() * (1.0 + 1e-12));
        }
    }
}

#[test]
fn rotation_then_tilt() {
    // A quarter turn past periapsis on a polar orbit points straight up
    let polar = elements(2.0, 0.0, 90.0, 0.0, 0.0, 1.0);
    assert_almost_eq_vec3(
        position_at_true_anomaly(&polar, PI / 2.0),
        DVec3::new(0.0, 0.0, 2.0),
        "polar orbit",
    );

    // Periapsis rotated a quarter turn, no tilt
    let rotated = elements(2.0, 0.0, 0.0, 0.0, 90.0, 1.0);
    assert_almost_eq_vec3(
        position_at_true_anomaly(&rotated, 0.0),
        DVec3::new(0.0, 2.0, 0.0),
        "rotated periapsis",
    );

    // Both: periapsis along +y is tilted out of the plane
    let both = elements(2.0, 0.0, 30.0, 0.0, 90.0, 1.0);
    assert_almost_eq_vec3(
        position_at_true_anomaly(&both, 0.0),
        DVec3::new(0.0, 2.0 * 30f64.to_radians().cos(), 2.0 * 30f64.to_radians().sin()),
        "rotated then tilted",
    );
}

#[test]
fn tilt_preserves_distance() {
    for _ in 0..RANDOM_CASES {
        let elements = random_elliptic();
        let angle = rand::random_range(-PI..PI);

        let position = position_at_true_anomaly(&elements, angle);
        assert_almost_eq_within(
            position.length(),
            elements.radius_at_true_anomaly(angle),
            1e-9 * elements.semi_major_axis(),
            "distance from primary",
        );
    }
}

#[test]
fn eccentric_and_true_anomaly_agree() {
    for _ in 0..RANDOM_CASES {
        let elements = random_elliptic();
        let ecc_anom = rand::random_range(-PI..PI);
        let true_anomaly = true_anomaly_at_eccentric_anomaly(elements.eccentricity(), ecc_anom);

        assert_almost_eq_vec3_within(
            position_at_eccentric_anomaly(&elements, ecc_anom),
            position_at_true_anomaly(&elements, true_anomaly),
            1e-9 * elements.semi_major_axis(),
            &format!("E = {ecc_anom} for {elements:?}"),
        );
    }
}

#[test]
fn earth_like_at_j2000() {
    let earth = earth_like();
    let position = local_position(&earth, JulianDay::J2000, &SolverOptions::default()).unwrap();
    let distance = position.length();

    assert!(
        (147.1..=152.1).contains(&distance),
        "Earth-like distance {distance} at J2000"
    );
    assert_eq!(position.z, 0.0);
}

#[test]
fn mean_longitude_wraps() {
    for _ in 0..RANDOM_CASES {
        let elements = random_elliptic();
        let shifted = OrbitalElements::new(
            elements.semi_major_axis(),
            elements.eccentricity(),
            elements.inclination(),
            elements.mean_longitude() + 360.0,
            elements.periapsis(),
            elements.mean_motion(),
        )
        .unwrap();
        let date = random_date();
        let options = SolverOptions::default();

        assert_almost_eq_vec3_within(
            local_position(&elements, date, &options).unwrap(),
            local_position(&shifted, date, &options).unwrap(),
            1e-4 * elements.semi_major_axis(),
            &format!("L0 + 360 for {elements:?} on {date}"),
        );
    }
}

#[test]
fn elements_validation() {
    assert_eq!(
        OrbitalElements::new(1.0, 1.0, 0.0, 0.0, 0.0, 1.0),
        Err(ElementsError::EccentricityOutOfRange(1.0))
    );
    assert_eq!(
        OrbitalElements::new(1.0, -0.1, 0.0, 0.0, 0.0, 1.0),
        Err(ElementsError::EccentricityOutOfRange(-0.1))
    );
    assert_eq!(
        OrbitalElements::new(0.0, 0.1, 0.0, 0.0, 0.0, 1.0),
        Err(ElementsError::NonPositiveSemiMajorAxis(0.0))
    );
    assert_eq!(
        OrbitalElements::new(1.0, 0.1, f64::NAN, 0.0, 0.0, 1.0),
        Err(ElementsError::NonFinite {
            field: "inclination"
        })
    );
    assert!(OrbitalElements::new(1.0, 0.0, 0.0, 0.0, 0.0, 1.0).is_ok());
}

#[test]
fn derived_geometry() {
    let elements = elements(10.0, 0.6, 0.0, 0.0, 0.0, 0.5);

    assert_almost_eq(elements.semi_minor_axis(), 8.0, "semi-minor axis");
    assert_almost_eq(elements.semi_latus_rectum(), 6.4, "semi-latus rectum");
    assert_almost_eq(elements.periapsis_distance(), 4.0, "periapsis");
    assert_almost_eq(elements.apoapsis_distance(), 16.0, "apoapsis");
    assert_almost_eq(elements.orbital_period(), 720.0, "period");
}

#[test]
fn one_period_later_is_same_place() {
    let options = SolverOptions::default();

    for _ in 0..RANDOM_CASES {
        let elements = random_elliptic();
        let jd = JulianDay::from(random_date());
        let later = JulianDay(jd.0 + elements.orbital_period());

        assert_almost_eq_vec3_within(
            local_position(&elements, jd, &options).unwrap(),
            local_position(&elements, later, &options).unwrap(),
            1e-4 * elements.semi_major_axis(),
            &format!("one period later for {elements:?}"),
        );
    }
}

// Body table

#[test]
fn moon_offset_from_planet() {
    let table = planet_and_moon();

    assert_almost_eq_vec3(
        table.position("Planet", JulianDay::J2000).unwrap(),
        DVec3::new(100.0, 0.0, 0.0),
        "planet",
    );
    assert_almost_eq_vec3(
        table.position("Moon", JulianDay::J2000).unwrap(),
        DVec3::new(105.0, 0.0, 0.0),
        "moon",
    );
    assert_eq!(
        table.position("Star", JulianDay::J2000).unwrap(),
        DVec3::ZERO
    );
}

#[test]
fn child_minus_parent_is_local() {
    let table = BodyTable::from_records(body_presets::solar_system()).unwrap();
    let moon = table.body("Moon").unwrap();
    let options = SolverOptions::default();

    for _ in 0..RANDOM_CASES {
        let date = random_date();
        let world = table.position("Moon", date).unwrap();
        let parent = table.position("Earth", date).unwrap();
        let local = local_position(moon.elements().unwrap(), date, &options).unwrap();

        assert_almost_eq_vec3_within(world - parent, local, 1e-9, &format!("Moon on {date}"));
    }
}

#[test]
fn unparented_orbit_is_around_origin() {
    let elements = earth_like();
    let table = BodyTable::from_records([BodyRecord::orbiting("Lonely", None, elements)]).unwrap();
    let options = SolverOptions::default();

    for _ in 0..16 {
        let date = random_date();
        assert_eq!(
            table.position("Lonely", date).unwrap(),
            local_position(&elements, date, &options).unwrap()
        );
    }
}

#[test]
fn positions_at_matches_position() {
    let table = BodyTable::from_records(body_presets::solar_system()).unwrap();
    let options = SolverOptions::default();

    for _ in 0..32 {
        let date = random_date();
        let all = table.positions_at(date).unwrap();
        assert_eq!(all, table.positions_at_with(date, &options).unwrap());

        assert_eq!(all.len(), table.len());
        for (id, position) in all {
            let name = table.get(id).unwrap().name();
            assert_almost_eq_vec3_within(
                position,
                table.position(name, date).unwrap(),
                1e-9,
                &format!("{name} on {date}"),
            );
        }
    }
}

#[test]
fn unknown_body() {
    let table = planet_and_moon();

    assert_eq!(
        table.position("Pluto", JulianDay::J2000),
        Err(QueryError::Lookup(crate::LookupError {
            name: "Pluto".to_string()
        }))
    );
    assert!(matches!(
        table.orbit_path("Pluto", JulianDay::J2000, 10),
        Err(QueryError::Lookup(_))
    ));
}

#[test]
fn convergence_failure_in_parent_surfaces() {
    let moon = elements(0.1, 0.0, 0.0, 0.0, 0.0, 1.0);
    let table = BodyTable::from_records([
        BodyRecord::orbiting("Planet", None, elements(1.0, 0.5, 0.0, 40.0, 0.0, 1.0)),
        BodyRecord::orbiting("Moon", Some("Planet"), moon),
    ])
    .unwrap();

    // No Newton steps allowed: only the circular moon can be solved
    let options = SolverOptions::default().with_max_iterations(0);
    assert!(local_position(&moon, JulianDay::J2000, &options).is_ok());

    assert!(matches!(
        table.position_with("Moon", JulianDay::J2000, &options),
        Err(QueryError::Convergence(err)) if err.eccentricity == 0.5
    ));
    assert!(matches!(
        table.orbit_path_with("Moon", JulianDay::J2000, 10, &options),
        Err(QueryError::Convergence(_))
    ));
    assert!(table.positions_at_with(JulianDay::J2000, &options).is_err());
    assert!(table.positions_at(JulianDay::J2000).is_ok());
}

#[test]
fn table_relations() {
    let table = BodyTable::from_records(body_presets::solar_system()).unwrap();

    let sun = table.id_of("Sun").unwrap();
    let earth = table.id_of("Earth").unwrap();
    let moon = table.id_of("Moon").unwrap();

    assert_eq!(table.roots().collect::<Vec<_>>(), vec![sun]);
    assert_eq!(table.parent_of(moon), Some(earth));
    assert_eq!(table.parent_of(sun), None);
    assert_eq!(table.satellites_of(earth), &[moon]);
    assert_eq!(table.satellites_of(sun).len(), 8);
    assert_eq!(table.depth_of(sun), Some(0));
    assert_eq!(table.depth_of(earth), Some(1));
    assert_eq!(table.depth_of(moon), Some(2));
    assert_eq!(table.max_depth(), 2);
    assert_eq!(table.body("Moon").unwrap().color(), Some("lightgray"));
}

#[test]
fn records_can_list_children_first() {
    let moon = elements(1.0, 0.0, 0.0, 0.0, 0.0, 1.0);
    let planet = elements(10.0, 0.0, 0.0, 0.0, 0.0, 1.0);

    let table = BodyTable::from_records([
        BodyRecord::orbiting("Moon", Some("Planet"), moon),
        BodyRecord::orbiting("Planet", Some("Star"), planet),
        BodyRecord::root("Star"),
    ])
    .unwrap();

    assert_eq!(table.depth_of(table.id_of("Moon").unwrap()), Some(2));
    assert_almost_eq_vec3(
        table.position("Moon", JulianDay::J2000).unwrap(),
        DVec3::new(11.0, 0.0, 0.0),
        "moon listed first",
    );
}

#[test]
fn rejects_cycles() {
    let elements = elements(1.0, 0.0, 0.0, 0.0, 0.0, 1.0);

    let two = BodyTable::from_records([
        BodyRecord::orbiting("A", Some("B"), elements),
        BodyRecord::orbiting("B", Some("A"), elements),
    ]);
    assert!(matches!(two, Err(ConfigurationError::CyclicParent { .. })));

    let own = BodyTable::from_records([BodyRecord::orbiting("A", Some("A"), elements)]);
    assert!(matches!(own, Err(ConfigurationError::CyclicParent { body }) if body == "A"));

    // A valid chain hanging off a cycle
    let tail = BodyTable::from_records([
        BodyRecord::orbiting("D", Some("C"), elements),
        BodyRecord::orbiting("C", Some("A"), elements),
        BodyRecord::orbiting("A", Some("B"), elements),
        BodyRecord::orbiting("B", Some("E"), elements),
        BodyRecord::orbiting("E", Some("A"), elements),
    ]);
    assert!(matches!(tail, Err(ConfigurationError::CyclicParent { .. })));
}

#[test]
fn rejects_bad_records() {
    let elements = elements(1.0, 0.0, 0.0, 0.0, 0.0, 1.0);

    let dangling = BodyTable::from_records([BodyRecord::orbiting("Moon", Some("Nowhere"), elements)]);
    assert!(matches!(
        dangling,
        Err(ConfigurationError::DanglingParent { body, parent }) if body == "Moon" && parent == "Nowhere"
    ));

    let duplicate = BodyTable::from_records([BodyRecord::root("Sun"), BodyRecord::root("Sun")]);
    assert!(matches!(duplicate, Err(ConfigurationError::DuplicateName(name)) if name == "Sun"));

    let partial = BodyRecord {
        eccentricity: None,
        ..BodyRecord::orbiting("Comet", None, elements)
    };
    assert!(matches!(
        BodyTable::from_records([partial]),
        Err(ConfigurationError::PartialElements { missing: "eccentricity", .. })
    ));

    let hyperbolic = BodyRecord {
        eccentricity: Some(1.5),
        ..BodyRecord::orbiting("Comet", None, elements)
    };
    assert!(matches!(
        BodyTable::from_records([hyperbolic]),
        Err(ConfigurationError::InvalidElements {
            source: ElementsError::EccentricityOutOfRange(_),
            ..
        })
    ));

    let stray = BodyRecord {
        parent: Some("Sun".to_string()),
        ..BodyRecord::root("Rock")
    };
    assert!(matches!(
        BodyTable::from_records([BodyRecord::root("Sun"), stray]),
        Err(ConfigurationError::ParentWithoutElements { .. })
    ));
}

#[test]
fn empty_table() {
    let table = BodyTable::from_records(Vec::<BodyRecord>::new()).unwrap();

    assert!(table.is_empty());
    assert_eq!(table.max_depth(), 0);
    assert_eq!(table.roots().count(), 0);
    assert!(table.positions_at(JulianDay::J2000).unwrap().is_empty());
}

// Orbit paths

#[test]
fn orbit_path_point_count_and_closure() {
    let table = BodyTable::from_records(body_presets::solar_system()).unwrap();
    let date = Date::new(2024, 3, 20).unwrap();

    for resolution in [2, 3, 10, 100, 1000] {
        for name in ["Mercury", "Earth", "Moon", "Neptune"] {
            let path = table.orbit_path(name, date, resolution).unwrap();
            assert_eq!(path.len(), resolution);

            let points: Vec<DVec3> = path.collect();
            assert_eq!(points.len(), resolution);

            let scale = table.body(name).unwrap().elements().unwrap().semi_major_axis();
            assert_almost_eq_vec3_within(
                points[0],
                points[resolution - 1],
                1e-9 * scale.max(1.0),
                &format!("{name} path with {resolution} points"),
            );
        }
    }
}

#[test]
fn orbit_path_degenerate_resolutions() {
    let table = planet_and_moon();

    assert_eq!(
        table.orbit_path("Moon", JulianDay::J2000, 0).unwrap().count(),
        0
    );

    let single: Vec<DVec3> = table
        .orbit_path("Moon", JulianDay::J2000, 1)
        .unwrap()
        .collect();
    assert_eq!(single.len(), 1);
    // Periapsis of the moon, around the planet
    assert_almost_eq_vec3(single[0], DVec3::new(105.0, 0.0, 0.0), "single point");
}

#[test]
fn orbit_path_of_root_is_an_error() {
    let table = planet_and_moon();

    assert_eq!(
        table.orbit_path("Star", JulianDay::J2000, 10),
        Err(QueryError::NoOrbit("Star".to_string()))
    );
}

#[test]
fn orbit_path_is_anchored_to_parent() {
    let table = BodyTable::from_records(body_presets::solar_system()).unwrap();
    let moon = *table.body("Moon").unwrap().elements().unwrap();

    for _ in 0..16 {
        let date = random_date();
        let earth = table.position("Earth", date).unwrap();
        let path = table.orbit_path("Moon", date, 64).unwrap();

        assert_eq!(path.anchor(), earth);

        for point in path {
            let distance = point.distance(earth);
            assert!(distance >= moon.periapsis_distance() * (1.0 - 1e-9));
            assert!(distance <= moon.apoapsis_distance() * (1.0 + 1e-9));
        }
    }
}

#[test]
fn orbit_path_contains_current_position() {
    // The body itself is on its path, whatever the date
    let table = BodyTable::from_records(body_presets::solar_system()).unwrap();

    for _ in 0..16 {
        let date = random_date();
        let position = table.position("Mars", date).unwrap();
        let closest = table
            .orbit_path("Mars", date, 20_000)
            .unwrap()
            .map(|point| point.distance(position))
            .fold(f64::INFINITY, f64::min);

        // 20 000 points on a ~1430 million km loop are ~0.07 apart
        assert!(closest < 0.1, "Mars is {closest} away from its path on {date}");
    }
}

#[test]
fn orbit_path_reverses() {
    let table = planet_and_moon();
    let forward: Vec<DVec3> = table
        .orbit_path("Planet", JulianDay::J2000, 17)
        .unwrap()
        .collect();
    let mut backward: Vec<DVec3> = table
        .orbit_path("Planet", JulianDay::J2000, 17)
        .unwrap()
        .rev()
        .collect();
    backward.reverse();

    assert_eq!(forward, backward);
}

#[test]
fn orbit_path_starts_at_periapsis() {
    let elements = elements(3.0, 0.5, 20.0, 0.0, 45.0, 1.0);
    let table = BodyTable::from_records([BodyRecord::orbiting("Comet", None, elements)]).unwrap();

    let first = table
        .orbit_path("Comet", JulianDay::J2000, 8)
        .unwrap()
        .next()
        .unwrap();

    assert_almost_eq_vec3(first, position_at_true_anomaly(&elements, 0.0), "periapsis");
    assert_almost_eq(first.length(), 1.5, "periapsis distance");
}
