use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Nearest bucket for an 8-bit intensity, rounding halves up.
fn down_scale(value: u32, levels: u32) -> u32 {
    let max = levels - 1;
    (2 * value * max + 255) / 510
}

/// Representative 8-bit intensity for a bucket, rounding halves up.
fn up_scale(bucket: u32, levels: u32) -> u32 {
    let max = levels - 1;
    (2 * bucket * 255 + max) / (2 * max)
}

fn write_table(file: &mut File, name: &str, doc: &str, values: &[u32]) {
    writeln!(file, "/// {doc}").unwrap();
    writeln!(file, "pub static {name}: [u8; {}] = [", values.len()).unwrap();
    for (i, value) in values.iter().enumerate() {
        if i > 0 && i % 16 == 0 {
            writeln!(file).unwrap();
        }
        write!(file, " {value:>3},").unwrap();
    }
    writeln!(file, "\n];\n").unwrap();
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("scale_lut.rs");
    let mut file = File::create(&dest_path).unwrap();

    for levels in [32u32, 64] {
        let bits = levels.trailing_zeros();

        let down: Vec<u32> = (0..256).map(|v| down_scale(v, levels)).collect();
        let up: Vec<u32> = (0..levels).map(|b| up_scale(b, levels)).collect();

        // Every bucket must map back onto itself, or pack/unpack drifts.
        for (bucket, &value) in up.iter().enumerate() {
            assert_eq!(down[value as usize], bucket as u32);
        }

        write_table(
            &mut file,
            &format!("DOWN_{bits}"),
            &format!("8-bit intensity to {bits}-bit bucket (nearest)."),
            &down,
        );
        write_table(
            &mut file,
            &format!("UP_{bits}"),
            &format!("{bits}-bit bucket to representative 8-bit intensity."),
            &up,
        );
    }

    println!("cargo::rerun-if-changed=build.rs");
}
