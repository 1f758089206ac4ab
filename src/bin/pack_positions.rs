//! CLI entry point: pack a store's reachable positions to completion,
//! bootstrapping it from a seed board on first run (§4.11).

use std::process::ExitCode;

use position_graph::codec::Side;
use position_graph::config::SeedSpec;
use position_graph::{Board, Config, Queues, Store};

fn main() -> ExitCode {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(&path),
        None => Ok(Config::default()),
    };
    let config = match config {
        Ok(config) => config,
        Err(err) => {
            log::error!("failed to load configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = run(config) {
        log::error!("{err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(config: Config) -> Result<(), position_graph::PositionGraphError> {
    let store = Store::new(&config.store_root);
    let queues = Queues::open(&store, config.max_queue_shard_bytes)?;

    if !config.store_root.is_dir() {
        let board = match &config.seed_board {
            Some(SeedSpec::Matrix(rows)) => {
                let mut cells = [[position_graph::Cell::Void; 8]; 8];
                for (row_index, (row, raw_row)) in cells.iter_mut().zip(rows.iter()).enumerate() {
                    for (col_index, (cell, &nibble)) in row.iter_mut().zip(raw_row.iter()).enumerate() {
                        let flat_position = row_index * 8 + col_index;
                        *cell = position_graph::Cell::from_nibble(nibble)
                            .map_err(|_| position_graph::codec::CodecError::MalformedBlob { nibble, flat_position })?;
                    }
                }
                Board::from_matrix(cells)
            }
            Some(SeedSpec::Hex(hex)) => Board::from_hex(hex)?,
            None => position_graph::seed::standard(),
        };
        log::info!("bootstrapping store at {} from seed position", config.store_root.display());
        queues.writer(Side::Light).push(&board.to_blob())?;
    }

    position_graph::run_to_completion(&store, &queues, config.batch_size)
}
