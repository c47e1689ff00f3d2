use std::path::Path;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use super::{batch, MidpointAppError, NetworkSummary};
use crate::{
    algorithm::midpoint::Traveler, config::MidpointConfiguration, service::MidpointService,
};

/// command line tool suggesting fair meeting stations on a transit network
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct MidpointApp {
    /// path to a .toml or .json file with meetpoint configuration
    #[arg(long, global = true)]
    pub configuration_file: Option<String>,
    /// overrides the configured minutes between adjacent stations
    #[arg(long, global = true)]
    pub minutes_per_stop: Option<u32>,
    /// overrides the configured minutes for changing lines
    #[arg(long, global = true)]
    pub transfer_penalty: Option<u32>,
    /// select the operation to run
    #[command(subcommand)]
    pub op: MidpointOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum MidpointOperation {
    /// list the lines, stations, and transfer stations of the network
    Stations,
    /// minimum travel minutes between two stations
    TravelTime {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
    /// travel minutes, transfers, and stops of the shortest route
    Route {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
    /// ranked fair meeting stations for a group, one --station per person
    Midpoint {
        #[arg(long = "station", required = true)]
        stations: Vec<String>,
        /// number of suggestions, defaults to the configured suggestion limit
        #[arg(long)]
        limit: Option<usize>,
    },
    /// find midpoints for every group in a CSV file with columns group_id,stations
    /// where stations is a ';'-separated list
    Batch {
        #[arg(long)]
        input: String,
        #[arg(long)]
        output: String,
        #[arg(long, default_value_t = 1)]
        parallelism: usize,
        #[arg(long, default_value_t = false)]
        overwrite: bool,
    },
}

impl MidpointApp {
    /// reads the configuration file if one was given and applies command
    /// line overrides.
    pub fn configuration(&self) -> Result<MidpointConfiguration, MidpointAppError> {
        let mut conf = match &self.configuration_file {
            None => MidpointConfiguration::default(),
            Some(f) => {
                log::info!("reading meetpoint configuration from {f}");
                MidpointConfiguration::try_from(f)?
            }
        };
        if let Some(minutes_per_stop) = self.minutes_per_stop {
            conf.minutes_per_stop = minutes_per_stop;
        }
        if let Some(transfer_penalty) = self.transfer_penalty {
            conf.transfer_penalty = transfer_penalty;
        }
        Ok(conf)
    }

    pub fn run(&self) -> Result<String, MidpointAppError> {
        let conf = self.configuration()?;
        log::info!("loading {} transit network", conf.network);
        let service = MidpointService::try_from(&conf)?;
        self.op.run(&service)
    }
}

impl MidpointOperation {
    /// runs this operation against a service, returning the text to print.
    pub fn run(&self, service: &MidpointService) -> Result<String, MidpointAppError> {
        match self {
            MidpointOperation::Stations => {
                let summary = NetworkSummary::from(service.network());
                Ok(serde_json::to_string_pretty(&summary)?)
            }
            MidpointOperation::TravelTime { from, to } => {
                match service.travel_time(from, to) {
                    Some(minutes) => Ok(minutes.to_string()),
                    None => Ok(format!("no route between {from} and {to}")),
                }
            }
            MidpointOperation::Route { from, to } => match service.route_summary(from, to) {
                Some(summary) => Ok(serde_json::to_string_pretty(&summary)?),
                None => Ok(format!("no route between {from} and {to}")),
            },
            MidpointOperation::Midpoint { stations, limit } => {
                let suggestions = match limit {
                    None => {
                        let names = stations.iter().map(|s| s.as_str()).collect::<Vec<_>>();
                        service.suggest(&names)
                    }
                    Some(0) => {
                        return Err(MidpointAppError::InvalidUserInput(String::from(
                            "limit must be at least 1",
                        )))
                    }
                    Some(limit) => {
                        let travelers =
                            stations.iter().map(|s| Traveler::at(s)).collect::<Vec<_>>();
                        service.rank_midpoints(&travelers, *limit)
                    }
                };
                if suggestions.is_empty() {
                    Ok(String::from(batch::MIDPOINT_UNAVAILABLE))
                } else {
                    Ok(serde_json::to_string_pretty(&suggestions)?)
                }
            }
            MidpointOperation::Batch {
                input,
                output,
                parallelism,
                overwrite,
            } => {
                let n_rows = batch::run_batch(
                    service,
                    Path::new(input),
                    Path::new(output),
                    *parallelism,
                    *overwrite,
                )?;
                Ok(format!("wrote {n_rows} midpoint rows to {output}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::RouteCosts;
    use crate::model::{TransitLine, TransitNetwork};

    fn mock_service() -> MidpointService {
        let network = TransitNetwork::new(vec![
            TransitLine::new("L1", ["X", "Y", "Z"]),
            TransitLine::new("L2", ["Z", "W"]),
        ])
        .expect("test invariant failed: network should be valid");
        MidpointService::new(network, RouteCosts::new(2, 6))
    }

    #[test]
    fn test_parse_midpoint_args() {
        let app = MidpointApp::try_parse_from([
            "meetpoint",
            "--transfer-penalty",
            "4",
            "midpoint",
            "--station",
            "X",
            "--station",
            "W",
        ])
        .expect("arguments should parse");
        let conf = app.configuration().expect("default configuration");
        assert_eq!(conf.transfer_penalty, 4);
        assert_eq!(conf.minutes_per_stop, 2);
        match app.op {
            MidpointOperation::Midpoint { stations, limit } => {
                assert_eq!(stations, vec!["X", "W"]);
                assert_eq!(limit, None);
            }
            _ => panic!("expected midpoint operation"),
        }
    }

    #[test]
    fn test_travel_time_output() {
        let service = mock_service();
        let op = MidpointOperation::TravelTime {
            from: String::from("X"),
            to: String::from("W"),
        };
        assert_eq!(op.run(&service).expect("should run"), "12");
        let op = MidpointOperation::TravelTime {
            from: String::from("X"),
            to: String::from("Nowhere"),
        };
        assert_eq!(
            op.run(&service).expect("should run"),
            "no route between X and Nowhere"
        );
    }

    #[test]
    fn test_route_output() {
        let service = mock_service();
        let op = MidpointOperation::Route {
            from: String::from("X"),
            to: String::from("W"),
        };
        let out = op.run(&service).expect("should run");
        let decoded: serde_json::Value =
            serde_json::from_str(&out).expect("output should be json");
        assert_eq!(decoded["minutes"], 12);
        assert_eq!(decoded["transfers"], 1);
    }

    #[test]
    fn test_midpoint_output() {
        let service = mock_service();
        let op = MidpointOperation::Midpoint {
            stations: vec![String::from("X"), String::from("W")],
            limit: Some(1),
        };
        let out = op.run(&service).expect("should run");
        let decoded: serde_json::Value =
            serde_json::from_str(&out).expect("output should be json");
        assert_eq!(decoded[0]["station"], "Z");
        assert_eq!(decoded[0]["fairness"], 2);

        let op = MidpointOperation::Midpoint {
            stations: vec![String::from("X")],
            limit: None,
        };
        assert_eq!(op.run(&service).expect("should run"), "midpoint unavailable");
    }

    #[test]
    fn test_zero_limit_rejected() {
        let service = mock_service();
        let op = MidpointOperation::Midpoint {
            stations: vec![String::from("X"), String::from("W")],
            limit: Some(0),
        };
        assert!(matches!(
            op.run(&service),
            Err(MidpointAppError::InvalidUserInput(_))
        ));
    }

    #[test]
    fn test_stations_output() {
        let service = mock_service();
        let out = MidpointOperation::Stations
            .run(&service)
            .expect("should run");
        let decoded: NetworkSummary = serde_json::from_str(&out).expect("output should be json");
        assert_eq!(decoded.lines.len(), 2);
        assert_eq!(decoded.stations.len(), 4);
        assert_eq!(decoded.transfer_stations.len(), 1);
        assert!(decoded.loop_lines.is_empty());
    }

    #[test]
    fn test_midpoint_without_limit_uses_suggestion_limit() {
        let service = mock_service().with_suggestion_limit(2);
        let op = MidpointOperation::Midpoint {
            stations: vec![String::from("X"), String::from("W")],
            limit: None,
        };
        let out = op.run(&service).expect("should run");
        let decoded: Vec<serde_json::Value> =
            serde_json::from_str(&out).expect("output should be json");
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0]["station"], "Z");
    }
}
