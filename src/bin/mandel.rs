// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate clap;
extern crate image;
extern crate mandelzoom;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use image::pnm::PNMEncoder;
use image::pnm::{PNMSubtype, SampleEncoding};
use image::ColorType;
use mandelzoom::{
    compute_field_threaded, render_field, view_from_query, view_to_query, Bounds, ColorScheme,
    Point, ScreenRect, Viewport,
};
use std::fs::File;
use std::str::FromStr;
use std::sync::atomic::AtomicBool;
use std::time::Instant;

/// Given a string and a separator, returns the two values separated
/// by the separator.
fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

/// Parses a screen-space selection of the form `X1,Y1:X2,Y2`.
fn parse_selection(s: &str) -> Option<Bounds> {
    match s.find(':') {
        None => None,
        Some(index) => match (
            parse_pair::<f64>(&s[..index], ','),
            parse_pair::<f64>(&s[index + 1..], ','),
        ) {
            (Some(start), Some(end)) => Some(Bounds::new(
                Point::new(start.0, start.1),
                Point::new(end.0, end.1),
            )),
            _ => None,
        },
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const VIEW: &str = "view";
const ZOOM: &str = "zoom";
const THREADS: &str = "threads";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("mandel")
        .version("0.1.0")
        .about("Mandelbrot field renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("800x600")
                .validator(|s| validate_pair::<usize>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(VIEW)
                .required(false)
                .long(VIEW)
                .short("v")
                .takes_value(true)
                .default_value("")
                .help("View-state query string (x=&y=&scale=&maxIter=&colorScheme=)"),
        )
        .arg(
            Arg::with_name(ZOOM)
                .required(false)
                .long(ZOOM)
                .short("z")
                .takes_value(true)
                .validator(|s| match parse_selection(&s) {
                    Some(_) => Ok(()),
                    None => Err("Could not parse zoom selection (X1,Y1:X2,Y2)".to_string()),
                })
                .help("Pixel rectangle to zoom into before rendering"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("0")
                .validator(move |s| {
                    validate_range(
                        &s,
                        0,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 0 and {}", max_threads),
                    )
                })
                .help("Number of worker threads (0 means one per CPU)"),
        )
        .get_matches()
}

fn write_image(outfile: &str, pixels: &[u8], screen: ScreenRect) -> Result<(), std::io::Error> {
    let output = File::create(outfile)?;
    let mut encoder =
        PNMEncoder::new(output).with_subtype(PNMSubtype::Pixmap(SampleEncoding::Binary));
    encoder.encode(
        pixels,
        screen.width as u32,
        screen.height as u32,
        ColorType::RGB(8),
    )?;
    Ok(())
}

fn main() {
    let matches = args();
    let size = parse_pair::<usize>(matches.value_of(SIZE).unwrap(), 'x')
        .expect("Error parsing image dimensions");
    let screen = ScreenRect::new(size.0, size.1);
    let threads =
        usize::from_str(matches.value_of(THREADS).unwrap()).expect("Could not parse thread count");

    let mut view = view_from_query(matches.value_of(VIEW).unwrap());

    if let Some(selection) = matches.value_of(ZOOM).map(|s| {
        parse_selection(s).expect("Error parsing zoom selection")
    }) {
        let viewport = match Viewport::new(&view, screen) {
            Ok(viewport) => viewport,
            Err(e) => {
                eprintln!("Bad view: {}", e);
                std::process::exit(1);
            }
        };
        view = match viewport.zoom_to(&selection) {
            Ok(zoomed) => zoomed,
            Err(e) => {
                eprintln!("Bad zoom selection: {}", e);
                std::process::exit(1);
            }
        };
        println!("{}", view_to_query(&view));
    }

    let started = Instant::now();
    let grid = match compute_field_threaded(&view, screen, threads, &AtomicBool::new(false)) {
        Err(e) => {
            eprintln!("Render failure: {}", e);
            std::process::exit(1);
        }
        Ok(None) => {
            eprintln!("Render cancelled");
            std::process::exit(1);
        }
        Ok(Some(grid)) => grid,
    };
    eprintln!(
        "computed {}x{} field in {:?}",
        screen.width,
        screen.height,
        started.elapsed()
    );

    let scheme = ColorScheme::from_index(view.color_scheme);
    let pixels = render_field(&grid, view.max_iterations, scheme);
    if let Err(e) = write_image(matches.value_of(OUTPUT).unwrap(), &pixels, screen) {
        eprintln!("Write failure: {}", e);
        std::process::exit(1);
    }
}
