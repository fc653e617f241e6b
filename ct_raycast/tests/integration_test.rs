use std::{fs, path::PathBuf};

use ct_raycast::{
    premade::parse::raw_parser,
    render::{RenderOptions, Renderer, ViewAxis},
    test_helpers::{self, AIR, BONE},
    volumetric::{from_file, Endianness, LinearVolume, Volume},
    VolumeError,
};
use nalgebra::vector;

pub const N: usize = 24;

/// Write `volume` as headerless raw samples
fn write_raw(volume: &LinearVolume, endianness: Endianness, name: &str) -> PathBuf {
    let size = volume.get_size();
    let mut bytes = Vec::with_capacity(size.x * size.y * size.z * 2);
    for z in 0..size.z {
        for y in 0..size.y {
            for x in 0..size.x {
                let v = volume.sample(x, y, z);
                match endianness {
                    Endianness::Big => bytes.extend_from_slice(&v.to_be_bytes()),
                    Endianness::Little => bytes.extend_from_slice(&v.to_le_bytes()),
                }
            }
        }
    }

    let mut path = std::env::temp_dir();
    path.push(format!("ct_raycast_{}_{name}.raw", std::process::id()));
    fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn load_both_byte_orders() {
    let phantom = test_helpers::head_phantom(N);

    for (endianness, name) in [(Endianness::Big, "be"), (Endianness::Little, "le")] {
        let path = write_raw(&phantom, endianness, name);
        let loaded: LinearVolume = from_file(&path, raw_parser(phantom.get_size(), endianness)).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(loaded.get_size(), phantom.get_size());
        assert_eq!(loaded.min(), AIR);
        assert_eq!(loaded.max(), BONE);
        assert_eq!(loaded.sample(N / 2, N / 2, N / 2), BONE);
        assert_eq!(loaded.sample(0, 0, 0), AIR);
    }
}

#[test]
fn wrong_byte_order_changes_data() {
    let phantom = test_helpers::head_phantom(N);
    let path = write_raw(&phantom, Endianness::Big, "swapped");
    let loaded: LinearVolume = from_file(&path, raw_parser(phantom.get_size(), Endianness::Little)).unwrap();
    fs::remove_file(&path).unwrap();

    assert_ne!(loaded.sample(0, 0, 0), AIR);
}

#[test]
fn file_too_small() {
    let phantom = test_helpers::head_phantom(8);
    let path = write_raw(&phantom, Endianness::Big, "small");
    let res: Result<LinearVolume, _> = from_file(&path, raw_parser(vector![9, 9, 9], Endianness::Big));
    fs::remove_file(&path).unwrap();

    assert!(matches!(res, Err(VolumeError::SizeMismatch { .. })));
}

#[test]
fn render_loaded_volume() {
    let phantom = test_helpers::head_phantom(N);
    let path = write_raw(&phantom, Endianness::Little, "render");
    let loaded: LinearVolume = from_file(&path, raw_parser(phantom.get_size(), Endianness::Little)).unwrap();
    fs::remove_file(&path).unwrap();

    let renderer = Renderer::new(loaded);
    let center = N / 2;

    for view in ViewAxis::ALL {
        // Slice through the middle shows bone brightest
        let slice = renderer.draw_slice(view, center);
        assert_eq!(slice.pixel(center, center).x, 1.0);
        assert_eq!(slice.pixel(0, 0).x, 0.0);

        let mip = renderer.maximum_intensity_projection(view);
        assert_eq!(mip.pixel(center, center).x, 1.0);

        // Plain compositing: skin then bone in the middle, nothing in the corner
        let plain = renderer.render(view, &RenderOptions::default());
        assert!(plain.pixel(center, center).x > 0.5);
        assert_eq!(plain.pixel(0, 0), ct_raycast::color::new(0.0, 0.0, 0.0, 1.0));

        // Shaded: rays through the bone ball get a surface, corner rays miss it
        let opts = RenderOptions::builder()
            .gradient_shading(true)
            .gradient_interpolation(true)
            .build()
            .unwrap();
        let shaded = renderer.render(view, &opts);
        assert_eq!(shaded.pixel(0, 0), ct_raycast::color::new(0.0, 0.0, 0.0, 1.0));
        assert!(shaded.pixels().iter().all(|p| p.x <= 0.8 + f32::EPSILON));

        assert_eq!(shaded.to_rgb8().len(), 3 * N * N);
    }
}

#[test]
fn missing_file() {
    let res: Result<LinearVolume, _> = from_file(
        "definitely/not/here.raw",
        raw_parser(vector![2, 2, 2], Endianness::Big),
    );
    assert!(matches!(res, Err(VolumeError::NotAFile(_))));
}
