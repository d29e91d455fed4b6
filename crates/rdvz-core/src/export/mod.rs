// crates/rdvz-core/src/export/mod.rs
//
// Flat plot views of a trajectory. Each view is a run of "(a,b)" or
// "(a,b,c)" tuples with no separator, terminated by one newline, suitable
// for pasting into a TikZ/pgfplots `coordinates {...}` body.
//
// Framing: the first tuple is the literal initial position (t = 0) and the
// last is the literal origin (t = T), not the computed state at T. If the
// solve does not land exactly on the origin the plotted curve jumps in its
// final segment; `RendezvousPlan::terminal_miss` reports by how much.

pub mod number;

use crate::export::number::NumberFormat;
use crate::linalg::vec3::Vec3;
use crate::trajectory::Trajectory;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    /// (x, z)
    XZ,
    /// (x, y, z)
    XYZ,
    /// (t, x)
    TX,
    /// (t, y)
    TY,
    /// (t, z)
    TZ,
}

impl View {
    pub const ALL: [View; 5] = [View::XZ, View::XYZ, View::TX, View::TY, View::TZ];

    pub fn file_name(self) -> &'static str {
        match self {
            View::XZ => "output_tikz_x_z.txt",
            View::XYZ => "output_tikz_x_y_z.txt",
            View::TX => "output_tikz_x_t.txt",
            View::TY => "output_tikz_y_t.txt",
            View::TZ => "output_tikz_z_t.txt",
        }
    }

    /// Values of one tuple for a point at time `t`.
    fn tuple(self, t: f64, p: Vec3) -> Vec<f64> {
        match self {
            View::XZ => vec![p.x, p.z],
            View::XYZ => vec![p.x, p.y, p.z],
            View::TX => vec![t, p.x],
            View::TY => vec![t, p.y],
            View::TZ => vec![t, p.z],
        }
    }
}

fn push_tuple(out: &mut String, values: &[f64], fmt: &NumberFormat) {
    out.push('(');
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&fmt.format(*v));
    }
    out.push(')');
}

pub fn render_view(view: View, traj: &Trajectory, fmt: &NumberFormat) -> String {
    let mut out = String::new();

    push_tuple(&mut out, &view.tuple(0.0, traj.initial_position), fmt);
    for s in &traj.samples {
        push_tuple(&mut out, &view.tuple(s.time, s.state.position), fmt);
    }
    push_tuple(&mut out, &view.tuple(traj.transfer_time, Vec3::ZERO), fmt);

    out.push('\n');
    out
}

/// All five views, in `View::ALL` order.
pub fn render_all(traj: &Trajectory, fmt: &NumberFormat) -> Vec<(View, String)> {
    View::ALL
        .iter()
        .map(|&v| (v, render_view(v, traj, fmt)))
        .collect()
}
