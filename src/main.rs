use anyhow::Result;
use log::info;

use roster::{find_slot, lookup_name, NameRegistry, Point, Shape};

fn main() -> Result<()> {
    env_logger::init();
    info!("starting roster demo, version {}", roster::VERSION);

    println!("📇 Roster Demo - identities, names and slots");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    demo_coordinates();
    demo_shapes();
    demo_name_lookup();
    demo_literals();
    demo_slot_replacement()?;
    demo_registry()?;

    println!("\n✅ All demonstrations completed");
    Ok(())
}

fn demo_coordinates() {
    println!("\n📍 Point coordinates");

    let (x, y) = Point::default().coordinates();
    println!("({}, {})", x, y);
}

fn demo_shapes() {
    println!("\n🔷 Shape descriptions");

    let shapes = [
        Shape::Circle { radius: 2.5 },
        Shape::Rectangle {
            length: 4.0,
            height: 4.0,
        },
        Shape::Rectangle {
            length: 4.0,
            height: 3.0,
        },
    ];

    for shape in shapes {
        println!("{}", shape.describe());
    }
}

fn demo_name_lookup() {
    println!("\n👤 Name lookup");

    // Whole triple
    let names = lookup_name(5);
    println!("found {}.", names);

    // Destructured, skipping the middle name
    let (first, _, last) = lookup_name(5).into_parts();
    println!("found {} {}.", first, last);
}

fn demo_literals() {
    println!("\n🔢 Literal separators");

    let one_million = 1_000_000;
    let bits = 0b1111_0000_0000_1101;
    println!("{} Cheerios is still a lot of {}", one_million, bits);
}

fn demo_slot_replacement() -> Result<()> {
    println!("\n🔁 Slot find-and-replace");

    let mut numbers = [1, 15, -39, 0, 7, 14, -12];
    print!("The value at position 4 was {}...", numbers[4]);

    let slot = find_slot(&7, &mut numbers)?; // aliases 7's place in the array
    *slot = 9;

    println!(" but has been changed to {}.", numbers[4]);
    Ok(())
}

fn demo_registry() -> Result<()> {
    println!("\n🗂️  Name registry");

    let registry = NameRegistry::new();

    let dave = registry.create("Dave");
    println!("✓ Registered {}", registry.display_name(&dave)?);

    registry.rename(&dave, "David");
    println!("✓ Renamed to {}", registry.display_name(&dave)?);

    let ada = registry.create("Ada");
    println!("✓ Roster now holds {} entries:", registry.len());
    println!("{}", serde_json::to_string_pretty(&registry.snapshot())?);

    registry.dispose(&dave);
    registry.dispose(&ada);
    println!("✓ Disposed; {} entries remain", registry.len());

    Ok(())
}
