use rdvz_core::export::number::{format_general, NumberFormat};
use rdvz_core::export::{render_all, render_view, View};
use rdvz_core::trajectory::state::{RelativeState, Sample};
use rdvz_core::trajectory::Trajectory;
use rdvz_core::{plan_rendezvous, PhysicalConstants, Scenario, Vec3};

fn count_tuples(text: &str) -> usize {
    text.matches('(').count()
}

fn default_trajectory() -> Trajectory {
    plan_rendezvous(&Scenario::default(), &PhysicalConstants::default())
        .unwrap()
        .trajectory
}

#[test]
fn xz_view_has_sixty_one_tuples() {
    let traj = default_trajectory();
    let text = render_view(View::XZ, &traj, &NumberFormat::default());
    assert_eq!(count_tuples(&text), 61);
    assert!(text.starts_with("(100000,100000)"));
    assert!(text.ends_with("(0,0)\n"));
    assert!(!text.contains(' '));
}

#[test]
fn time_views_are_framed_by_zero_and_transfer_time() {
    let traj = default_trajectory();
    let fmt = NumberFormat::default();

    let tx = render_view(View::TX, &traj, &fmt);
    assert!(tx.starts_with("(0,100000)"), "{tx}");
    assert!(tx.ends_with("(3600,0)\n"), "{tx}");
    assert!(tx.contains("(60,"));
    assert!(tx.contains("(3540,"));
    assert!(!tx.contains("(3600,0)("));

    for view in [View::TY, View::TZ] {
        let t = render_view(view, &traj, &fmt);
        assert!(t.starts_with("(0,100000)"));
        assert!(t.ends_with("(3600,0)\n"));
        assert_eq!(count_tuples(&t), 61);
    }
}

#[test]
fn xyz_view_uses_triples() {
    let traj = default_trajectory();
    let text = render_view(View::XYZ, &traj, &NumberFormat::default());
    assert!(text.starts_with("(100000,100000,100000)"));
    assert!(text.ends_with("(0,0,0)\n"));
    assert_eq!(text.matches(',').count(), 61 * 2);
}

#[test]
fn render_all_covers_every_file() {
    let traj = default_trajectory();
    let views = render_all(&traj, &NumberFormat::default());
    let names: Vec<_> = views.iter().map(|(v, _)| v.file_name()).collect();
    assert_eq!(
        names,
        [
            "output_tikz_x_z.txt",
            "output_tikz_x_y_z.txt",
            "output_tikz_x_t.txt",
            "output_tikz_y_t.txt",
            "output_tikz_z_t.txt",
        ]
    );
}

#[test]
fn hand_built_trajectory_renders_exactly() {
    let traj = Trajectory {
        initial_position: Vec3::new(10.0, -20.0, 30.0),
        transfer_time: 3.0,
        time_step: 1.0,
        num_samples: 3,
        samples: vec![
            Sample {
                index: 1,
                time: 1.0,
                state: RelativeState::new(Vec3::new(5.5, -1.0, 2.0), Vec3::ZERO),
            },
            Sample {
                index: 2,
                time: 2.0,
                state: RelativeState::new(Vec3::new(1234567.0, 0.25, -2.5e-7), Vec3::ZERO),
            },
        ],
    };
    let fmt = NumberFormat::default();
    assert_eq!(
        render_view(View::XZ, &traj, &fmt),
        "(10,30)(5.5,2)(1.23457e+06,-2.5e-07)(0,0)\n"
    );
    assert_eq!(
        render_view(View::TY, &traj, &fmt),
        "(0,-20)(1,-1)(2,0.25)(3,0)\n"
    );
    assert_eq!(
        render_view(View::XZ, &traj, &NumberFormat::Shortest),
        "(10,30)(5.5,2)(1234567,-0.00000025)(0,0)\n"
    );
}

#[test]
fn general_format_matches_stream_output() {
    let cases = [
        (100000.0, "100000"),
        (3600.0, "3600"),
        (0.0, "0"),
        (-0.0, "-0"),
        (-2.5e-7, "-2.5e-07"),
        (123456.789, "123457"),
        (1234567.0, "1.23457e+06"),
        (0.0001, "0.0001"),
        (0.00001, "1e-05"),
        (60.0, "60"),
        (-98765.4321, "-98765.4"),
        (1.0e300, "1e+300"),
    ];
    for (x, want) in cases {
        assert_eq!(format_general(x, 6), want, "x = {x}");
    }
    assert_eq!(format_general(3.14159265, 3), "3.14");
    assert_eq!(format_general(f64::INFINITY, 6), "inf");
}
