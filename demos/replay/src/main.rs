//! Replays a recorded sensor trace through stride-core
//!
//! Input is the sensor logger's CSV: two header lines, then one record per
//! line with record id, sensor id, date, time, three accelerometer axes
//! (m/s²) and three gyroscope axes (rad/s). Only the accelerometer Y axis is
//! used. Every record is written back with its timestamp, the running step
//! count and the current motion type.
//!
//! Usage: replay-example <input.csv> <output.csv>

use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};

use anyhow::{Context, Result, bail};
use stride_core::{Config, Pedometer};

struct Record<'a> {
    record_id: &'a str,
    sensor_id: &'a str,
    date: &'a str,
    time: &'a str,
    accel: [f32; 3],
    gyro: [f32; 3],
}

fn parse_record(line: &str) -> Result<Record<'_>> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < 10 {
        bail!("expected 10 fields, found {}", fields.len());
    }

    let number = |i: usize| -> Result<f32> {
        fields[i]
            .parse()
            .with_context(|| format!("field {} is not a number: {:?}", i + 1, fields[i]))
    };

    Ok(Record {
        record_id: fields[0],
        sensor_id: fields[1],
        date: fields[2],
        time: fields[3],
        accel: [number(4)?, number(5)?, number(6)?],
        gyro: [number(7)?, number(8)?, number(9)?],
    })
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        bail!("usage: {} <input.csv> <output.csv>", args[0]);
    }

    let input = File::open(&args[1]).with_context(|| format!("cannot open input file {}", args[1]))?;
    let output =
        File::create(&args[2]).with_context(|| format!("cannot open output file {}", args[2]))?;

    let mut lines = BufReader::new(input).lines();
    for _ in 0..2 {
        lines
            .next()
            .transpose()?
            .with_context(|| format!("cannot read the two header lines of {}", args[1]))?;
    }

    let mut out = BufWriter::new(output);
    writeln!(
        out,
        "RECORD, TYPE, DATE, TIME, arx, ary, arz, grx, gry, grz, timestamp(sec), step_count, step_type, step_type_num"
    )?;

    let mut pedometer = Pedometer::new(Config::default())?;

    for (n, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = parse_record(&line).with_context(|| format!("record {}", n + 1))?;

        let state = pedometer.update(record.accel[1]);
        let [ax, ay, az] = record.accel;
        let [gx, gy, gz] = record.gyro;

        writeln!(
            out,
            "{}, {}, {}, {}, {:.6}, {:.6}, {:.6}, {:.6}, {:.6}, {:.6}, {:.6}, {}, {}, {}",
            record.record_id,
            record.sensor_id,
            record.date,
            record.time,
            ax,
            ay,
            az,
            gx,
            gy,
            gz,
            pedometer.elapsed(),
            state.step_count,
            state.motion.label(),
            state.motion.code()
        )?;
    }
    out.flush()?;

    let summary = pedometer.summary();
    println!(
        "Total motion duration is {:.6} sec, which contains approximately:",
        summary.elapsed_s
    );
    println!(" {} Total number of steps including", summary.total_steps());
    println!(" |---> {} steps of WALKING,", summary.walk);
    println!(" |---> {} steps of RUNNING, and", summary.run);
    println!(" |---> {} steps of HOPPING.", summary.hop);
    println!("Done.");

    Ok(())
}
