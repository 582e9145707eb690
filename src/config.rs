use std::fmt;

use log::debug;

use crate::{
    error::ConfigError,
    vector::Vec3,
};


/// Parsing states.
#[derive(Clone, Copy, PartialEq, Debug)]
enum Parse {
    None,
    Axis,
    Angle,
    Degrees,
    Vector,
    From,
    To,
}
impl Parse {
    fn flag(&self) -> &'static str {
        match self {
            Parse::None    => "",
            Parse::Axis    => "-axis",
            Parse::Angle   => "-angle",
            Parse::Degrees => "-degrees",
            Parse::Vector  => "-vec",
            Parse::From    => "-from",
            Parse::To      => "-to",
        }
    }

    /// Flags whose vector is normalized before use and so cannot be zero.
    fn is_direction(&self) -> bool {
        matches!(self, Parse::Axis | Parse::From | Parse::To)
    }

    /// Number of values the flag consumes.
    fn arity(&self) -> usize {
        match self {
            Parse::None => 0,
            Parse::Angle | Parse::Degrees => 1,
            Parse::Axis | Parse::Vector | Parse::From | Parse::To => 3,
        }
    }
}


/// User defined settings for the command line demo.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub axis: Vec3,
    pub angle: f64,
    pub vec: Vec3,
    pub from: Option<Vec3>,
    pub to: Option<Vec3>,
}
impl Config {
    /// Create a new Config with the specified command line arguments.
    pub fn new(args: Vec<String>) -> Result<Config, ConfigError> {
        let mut parser = Parse::None;
        let mut cfg    = Config::default();
        let mut values = Vec::with_capacity(3);

        for arg in args.into_iter() {
            let next = match arg.as_str() {
                "-axis"    => Some(Parse::Axis),
                "-angle"   => Some(Parse::Angle),
                "-degrees" => Some(Parse::Degrees),
                "-vec"     => Some(Parse::Vector),
                "-from"    => Some(Parse::From),
                "-to"      => Some(Parse::To),
                _ => None,
            };
            if let Some(next) = next {
                if parser != Parse::None {
                    return Err(
                        ConfigError::MissingValue(parser.flag().to_string())
                    );
                }
                parser = next;
                continue;
            }
            if parser == Parse::None {
                debug!("ignoring argument {arg}");
                continue;
            }
            match arg.parse::<f64>() {
                Ok(value) => values.push(value),
                Err(_) => {
                    return Err(
                        ConfigError::InvalidNumber(parser.flag().to_string(), arg.clone())
                    );
                }
            }
            if values.len() == parser.arity() {
                cfg.apply(parser, &values)?;
                parser = Parse::None;
                values.clear();
            }
        }
        if parser != Parse::None {
            return Err(
                ConfigError::MissingValue(parser.flag().to_string())
            );
        }
        Ok(cfg)
    }

    fn apply(&mut self, parser: Parse, values: &[f64]) -> Result<(), ConfigError> {
        if parser.is_direction() && values.iter().all(|v| *v == 0.0) {
            return Err(
                ConfigError::ZeroVector(parser.flag().to_string())
            );
        }
        match parser {
            Parse::Axis    => self.axis = Vec3::new(values[0], values[1], values[2]),
            Parse::Angle   => self.angle = values[0],
            Parse::Degrees => self.angle = values[0].to_radians(),
            Parse::Vector  => self.vec = Vec3::new(values[0], values[1], values[2]),
            Parse::From    => self.from = Some(Vec3::new(values[0], values[1], values[2])),
            Parse::To      => self.to = Some(Vec3::new(values[0], values[1], values[2])),
            Parse::None    => {},
        }
        debug!("parsed {} {:?}", parser.flag(), values);
        Ok(())
    }
}
impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "
            \rAxis:   {}
            \rAngle:  {} rad
            \rVector: {}",
            self.axis,
            self.angle,
            self.vec,
        )?;
        if let (Some(from), Some(to)) = (self.from, self.to) {
            write!(f, "
                \rFrom:   {from}
                \rTo:     {to}",
            )?;
        }
        writeln!(f)
    }
}
impl Default for Config {
    fn default() -> Self {
        Self {
            axis: Vec3::unit_z(),
            angle: 0.0,
            vec: Vec3::unit_x(),
            from: None,
            to: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn defaults_without_flags() {
        let cfg = Config::new(args("quatern")).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn parses_all_flags() {
        let cfg = Config::new(args(
            "quatern -axis 1 0 0 -angle 0.5 -vec 0 -1.5 2 -from 1 0 0 -to 0 1 0"
        )).unwrap();

        assert_eq!(cfg.axis, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(cfg.angle, 0.5);
        assert_eq!(cfg.vec, Vec3::new(0.0, -1.5, 2.0));
        assert_eq!(cfg.from, Some(Vec3::unit_x()));
        assert_eq!(cfg.to, Some(Vec3::unit_y()));
    }

    #[test]
    fn degrees_convert_to_radians() {
        let cfg = Config::new(args("-degrees 180")).unwrap();
        approx::assert_relative_eq!(cfg.angle, std::f64::consts::PI);
    }

    #[test]
    fn rejects_bad_number() {
        let err = Config::new(args("-angle quarter")).unwrap_err();
        assert_eq!(err, ConfigError::InvalidNumber("-angle".into(), "quarter".into()));
    }

    #[test]
    fn rejects_missing_components() {
        assert_eq!(
            Config::new(args("-axis 1 0 -angle 2")).unwrap_err(),
            ConfigError::MissingValue("-axis".into()),
        );
        assert_eq!(
            Config::new(args("-vec 1 2")).unwrap_err(),
            ConfigError::MissingValue("-vec".into()),
        );
    }

    #[test]
    fn rejects_zero_directions() {
        for flag in ["-axis", "-from", "-to"] {
            let err = Config::new(args(&format!("{flag} 0 0 -0"))).unwrap_err();
            assert_eq!(err, ConfigError::ZeroVector(flag.into()));
        }
        let cfg = Config::new(args("-vec 0 0 0")).unwrap();
        assert_eq!(cfg.vec, Vec3::zero());
    }
}
