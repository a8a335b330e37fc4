//! Portfolio content and settings.
//!
//! Everything the page shows comes from a single read-only [`PortfolioConfig`]
//! loaded at startup: personal info, skills, projects, social links, section
//! copy, feature flags, and animation tuning. The file lives under the
//! platform config directory; a missing file falls back to the built-in
//! profile, while a malformed one is a startup error.

use std::fmt;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;

/// Config file name under the platform config directory.
const CONFIG_FILE: &str = "portfolio.toml";

/// Errors from loading the portfolio config.
#[derive(Debug)]
pub enum ConfigError {
    /// The file exists but could not be read.
    Io(std::io::Error),
    /// The file exists but is not valid TOML for the expected shape.
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read portfolio config: {e}"),
            Self::Parse(e) => write!(f, "failed to parse portfolio config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Personal information shown in the hero and contact sections.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Personal {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub email: String,
    pub location: String,
}

impl Default for Personal {
    fn default() -> Self {
        Self {
            name: "Hiro".to_string(),
            title: "Full-Stack Developer".to_string(),
            tagline: "Hi I'm Hiro and I'm passionate about crafting digital experiences. \
                      Welcome to my little corner on the internet. I make, bake and break \
                      software for the most innovative projects."
                .to_string(),
            email: "me@hiromull.lol".to_string(),
            location: "Digital Nomad".to_string(),
        }
    }
}

/// One skill entry with a 0-100 proficiency level.
#[derive(Debug, Clone, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: String,
    pub level: u8,
}

/// Links attached to a project.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectLinks {
    pub github: String,
    pub live: String,
}

/// One project entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    pub year: String,
    pub description: String,
    pub tags: Vec<String>,
    pub status: String,
    pub featured: bool,
    pub links: ProjectLinks,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            name: String::new(),
            year: String::new(),
            description: String::new(),
            tags: Vec::new(),
            status: "production".to_string(),
            featured: false,
            links: ProjectLinks::default(),
        }
    }
}

/// Social links shown in the contact section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Social {
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
}

impl Default for Social {
    fn default() -> Self {
        Self {
            github: "https://github.com/hiro".to_string(),
            linkedin: "https://linkedin.com/in/hiro".to_string(),
            twitter: "https://twitter.com/hiro".to_string(),
        }
    }
}

/// Copy for the about section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AboutContent {
    pub paragraphs: Vec<String>,
    pub availability: String,
}

impl Default for AboutContent {
    fn default() -> Self {
        Self {
            paragraphs: vec![
                "Passionate full-stack developer who loves creating elegant solutions to \
                 complex problems. I blend creativity with technical expertise to build \
                 applications that are both functional and beautiful."
                    .to_string(),
                "When I'm not coding, you'll find me exploring new technologies, \
                 contributing to open-source projects, or sharing knowledge with the \
                 developer community."
                    .to_string(),
            ],
            availability: "Available for freelance projects".to_string(),
        }
    }
}

/// Copy for the contact section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContactContent {
    pub description: String,
    pub cta: String,
}

impl Default for ContactContent {
    fn default() -> Self {
        Self {
            description: "Let's build something amazing together. I'm always excited to \
                          discuss new projects and opportunities."
                .to_string(),
            cta: "Thanks for visiting!".to_string(),
        }
    }
}

/// Section copy.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Content {
    pub about: AboutContent,
    pub contact: ContactContent,
}

/// Feature flags.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Features {
    /// Ambient binary particle field behind the page.
    pub particles: bool,
    /// Typewriter effect on the hero tagline.
    pub typing: bool,
    /// Background visit logging with geolocation enrichment.
    pub visitor_log: bool,
    /// Secondary utility tools page.
    pub tools: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            particles: true,
            typing: true,
            visitor_log: false,
            tools: true,
        }
    }
}

/// Aesthetic tuning knobs; the defaults match the shipped look.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Milliseconds per typed tagline character.
    pub typing_speed_ms: u64,
    /// Viewport cells per background particle.
    pub area_per_particle: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            typing_speed_ms: 50,
            area_per_particle: 48.0,
        }
    }
}

/// The complete static portfolio configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub personal: Personal,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub social: Social,
    pub content: Content,
    pub features: Features,
    pub tuning: Tuning,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            personal: Personal::default(),
            skills: default_skills(),
            projects: default_projects(),
            social: Social::default(),
            content: Content::default(),
            features: Features::default(),
            tuning: Tuning::default(),
        }
    }
}

impl PortfolioConfig {
    /// Load the config from the platform config directory.
    ///
    /// A missing file yields the built-in profile; a present but broken file
    /// is an error so a typo never silently erases the page content.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) if path.exists() => {
                let raw = std::fs::read_to_string(&path).map_err(ConfigError::Io)?;
                Self::from_toml_str(&raw)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Parse a config from TOML text.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(ConfigError::Parse)
    }
}

/// Path of the user's config file, if a home directory exists.
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "myeongham").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Platform data directory for app-produced files such as the visit log.
pub fn data_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "myeongham").map(|dirs| dirs.data_dir().to_path_buf())
}

fn default_skills() -> Vec<Skill> {
    [
        ("React", "Frontend", 95),
        ("TypeScript", "Language", 90),
        ("Node.js", "Backend", 85),
        ("Python", "Language", 80),
        ("Databases", "Backend", 85),
        ("UI/UX", "Design", 75),
        ("Infrastructure", "DevOps", 70),
        ("DevOps", "DevOps", 75),
    ]
    .into_iter()
    .map(|(name, category, level)| Skill {
        name: name.to_string(),
        category: category.to_string(),
        level,
    })
    .collect()
}

fn default_projects() -> Vec<Project> {
    vec![
        Project {
            name: "StrelineCloud".to_string(),
            year: "2023".to_string(),
            description: "High-performance hosting, custom development, and premium digital \
                          solutions for modern businesses and gaming communities."
                .to_string(),
            tags: vec!["PHP".to_string(), "Docker".to_string(), "K8s".to_string()],
            status: "production".to_string(),
            featured: true,
            links: ProjectLinks {
                github: "https://github.com/hiro/strelinecloud".to_string(),
                live: "https://strelinecloud.com".to_string(),
            },
        },
        Project {
            name: "Strelizia".to_string(),
            year: "2023".to_string(),
            description: "Advanced Discord moderation and management bot with custom \
                          commands, automod features, and community engagement tools."
                .to_string(),
            tags: vec![
                "Discord.py".to_string(),
                "Python3".to_string(),
                "SQL".to_string(),
            ],
            status: "production".to_string(),
            featured: true,
            links: ProjectLinks {
                github: "https://github.com/hiro/strelizia".to_string(),
                live: "https://discord.com/application-directory/strelizia".to_string(),
            },
        },
        Project {
            name: "Adios".to_string(),
            year: "2023".to_string(),
            description: "Modern JavaScript framework for building reactive web applications \
                          with enhanced performance and developer experience."
                .to_string(),
            tags: vec![
                "React".to_string(),
                "TypeScript".to_string(),
                "Node.js".to_string(),
            ],
            status: "development".to_string(),
            featured: true,
            links: ProjectLinks {
                github: "https://github.com/hiro/adios".to_string(),
                live: "https://adios-framework.dev".to_string(),
            },
        },
        Project {
            name: "CloudSync".to_string(),
            year: "2024".to_string(),
            description: "Real-time cloud storage synchronization platform with advanced \
                          file management and collaboration features."
                .to_string(),
            tags: vec![
                "Next.js".to_string(),
                "Supabase".to_string(),
                "TypeScript".to_string(),
            ],
            status: "production".to_string(),
            featured: true,
            links: ProjectLinks {
                github: "https://github.com/hiro/cloudsync".to_string(),
                live: "https://cloudsync.dev".to_string(),
            },
        },
        Project {
            name: "DataViz Pro".to_string(),
            year: "2024".to_string(),
            description: "Interactive data visualization toolkit for creating beautiful \
                          charts and dashboards with real-time analytics."
                .to_string(),
            tags: vec!["D3.js".to_string(), "React".to_string(), "Python".to_string()],
            status: "production".to_string(),
            featured: false,
            links: ProjectLinks {
                github: "https://github.com/hiro/dataviz-pro".to_string(),
                live: "https://dataviz-pro.com".to_string(),
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_populated() {
        let config = PortfolioConfig::default();
        assert_eq!(config.personal.name, "Hiro");
        assert_eq!(config.skills.len(), 8);
        assert_eq!(config.projects.len(), 5);
        assert!(config.features.particles);
        assert!(!config.features.visitor_log);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = PortfolioConfig::from_toml_str(
            r#"
            [personal]
            name = "Mina"
            title = "Systems Engineer"

            [[skills]]
            name = "Rust"
            category = "Language"
            level = 88

            [features]
            particles = false
            "#,
        )
        .unwrap();

        assert_eq!(config.personal.name, "Mina");
        // Unset personal fields keep their defaults.
        assert_eq!(config.personal.location, "Digital Nomad");
        assert_eq!(config.skills.len(), 1);
        assert_eq!(config.skills[0].level, 88);
        assert!(!config.features.particles);
        assert!(config.features.typing);
        // Untouched tables fall back wholesale.
        assert_eq!(config.projects.len(), 5);
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let err = PortfolioConfig::from_toml_str("personal = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_tuning_defaults() {
        let config = PortfolioConfig::default();
        assert_eq!(config.tuning.typing_speed_ms, 50);
        assert_eq!(config.tuning.area_per_particle, 48.0);
    }
}
