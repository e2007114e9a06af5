use cutpath::{
    OffsetError,
    offset::{OffsetOptions, offset, offset_opt},
    pline_closed,
    polyline::Polyline,
};

fn main() {
    env_logger::init();
    square_offsets();
    slot_offset();
    collapse();
}

fn print_pline(label: &str, pline: &Polyline<f64>) {
    println!(
        "  {}: area {:.4}, {} vertexes, {:?}",
        label,
        pline.area().abs(),
        pline.vertex_count(),
        pline.winding()
    );
    for v in pline.iter_vertexes() {
        println!("    ({:.4}, {:.4})", v.x, v.y);
    }
}

fn square_offsets() {
    println!("Offsetting a unit square by a 0.1 tool radius...");
    let square = pline_closed![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
    print_pline("input", &square);

    match offset(&square, 0.1, true) {
        Ok(path) => print_pline("outside", &path),
        Err(e) => println!("  outside failed: {}", e),
    }

    // reversing the input must not change which side the path lands on
    match offset(&square.inverted(), 0.1, false) {
        Ok(path) => print_pline("inside (reversed input)", &path),
        Err(e) => println!("  inside failed: {}", e),
    }
}

fn slot_offset() {
    println!("\nOffsetting a square with a slot narrower than the tool...");
    let slotted = pline_closed![
        (0.0, 0.0),
        (3.0, 0.0),
        (3.0, 3.0),
        (1.7, 3.0),
        (1.7, 1.0),
        (1.3, 1.0),
        (1.3, 3.0),
        (0.0, 3.0),
    ];
    print_pline("input", &slotted);

    let raw_options = OffsetOptions {
        trim_self_intersects: false,
        ..Default::default()
    };
    if let Ok(raw) = offset_opt(&slotted, 0.25, true, &raw_options) {
        print_pline("raw", &raw);
        println!("  raw self intersects: {}", raw.scan_for_self_intersect(1e-5));
    }

    if let Ok(path) = offset(&slotted, 0.25, true) {
        print_pline("trimmed", &path);
    }
}

fn collapse() {
    println!("\nShrinking a 1 x 1 square until it collapses...");
    let square = Polyline::from_rect(0.0, 0.0, 1.0, 1.0);
    for radius in [0.1_f64, 0.3, 0.49, 0.5, 0.7] {
        match offset(&square, radius, false) {
            Ok(path) => println!("  radius {:.2}: area {:.4}", radius, path.area().abs()),
            Err(OffsetError::Collapsed) => println!("  radius {:.2}: collapsed", radius),
            Err(e) => println!("  radius {:.2}: {}", radius, e),
        }
    }
}
