use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, LineWriter, Write};

use langseg_rs::{resolve, split_args, GLOBAL_SEGMENTER};

/// Line-oriented harness: each input line is a whitespace-separated argument
/// list; the output line is either `text <TAB> from <TAB> to` with canonical
/// codes, or the reason the line was rejected.
fn segment_line(line: &str) -> String {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let split = match split_args(&tokens) {
        Ok(split) => split,
        Err(e) => return format!("error: {}", e),
    };
    match resolve(GLOBAL_SEGMENTER.vocabulary(), &split) {
        Ok(req) => format!("{}\t{}\t{}", req.text, req.from, req.to),
        Err(e) => format!("error: {}", e),
    }
}

fn main() {
    env_logger::init();
    // simple command line interface
    let args: Vec<_> = std::env::args().collect();
    assert!(
        args.len() == 3,
        "should only specify the input file and output file"
    );
    let input_filename = &args[1];
    let output_filename = &args[2];
    let input_file = File::open(input_filename).expect("input file not exists");
    let lines = io::BufReader::new(input_file).lines();

    let mut opts = OpenOptions::new();
    opts.create(true).write(true);
    let output_file = opts.open(output_filename).expect("output file not exists");
    let mut writer = LineWriter::new(output_file);

    for line in lines {
        let mut record = segment_line(&line.unwrap());
        record.push('\n');
        writer.write_all(record.as_bytes()).unwrap();
    }
    writer.flush().unwrap();
}
