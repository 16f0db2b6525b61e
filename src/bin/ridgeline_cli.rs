// Copyright (C) 2021 Andreas Doerr
// SPDX-License-Identifier: Apache-2.0

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// 	http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Small demo harness: build a MMR from newline-separated input and
//! optionally prove membership of one of its leaves.

use std::io::Read;

use clap::Parser;
use ridgeline::{MerkleMountainRange, VecStore};

/// Build a Merkle Mountain Range from stdin (or a file) and inspect it.
#[derive(Parser, Debug)]
#[command(name = "ridgeline-cli", version, about)]
struct Args {
    /// File to read leaves from, one per line. Defaults to stdin.
    file: Option<std::path::PathBuf>,

    /// Generate and reverify a membership proof for this leaf position.
    #[arg(long)]
    prove: Option<u64>,
}

fn read_lines(args: &Args) -> std::io::Result<Vec<String>> {
    let mut text = String::new();

    match &args.file {
        Some(path) => {
            std::fs::File::open(path)?.read_to_string(&mut text)?;
        }
        None => {
            std::io::stdin().lock().read_to_string(&mut text)?;
        }
    }

    Ok(text.lines().map(str::to_owned).collect())
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let lines = match read_lines(&args) {
        Ok(lines) => lines,
        Err(e) => {
            eprintln!("error: failed to read input: {}", e);
            std::process::exit(1);
        }
    };

    let (mut mmr, auth) = MerkleMountainRange::<VecStore>::new(VecStore::new());

    let leaves: Vec<Vec<u8>> = lines.into_iter().map(String::into_bytes).collect();
    if let Err(e) = mmr.append_leaves(&auth, &leaves) {
        eprintln!("error: failed to append leaves: {}", e);
        std::process::exit(1);
    }

    println!("size: {}", mmr.size());
    println!("root: {}", mmr.root());
    println!("peaks:");
    for peak in mmr.peaks() {
        println!("  {}", peak);
    }

    if let Some(position) = args.prove {
        match mmr.generate_proof(position) {
            Ok(proof) => {
                println!("proof for position {}: {:?}", position, proof);

                let leaf_index = (1..position)
                    .filter(|&p| ridgeline::position::is_leaf(p))
                    .count();
                let datum = leaves.get(leaf_index);

                let verified = datum.is_some_and(|d| proof.verify(d));
                println!("reverifies against current root: {}", verified);
            }
            Err(e) => {
                eprintln!("error: failed to generate proof: {}", e);
                std::process::exit(1);
            }
        }
    }
}
