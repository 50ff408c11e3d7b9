/// Cloud provider choices offered on the project setup step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Local,
    DigitalOcean,
    Aws,
    Gcp,
    Azure,
}

impl Provider {
    pub fn all() -> &'static [Provider] {
        &[
            Provider::Local,
            Provider::DigitalOcean,
            Provider::Aws,
            Provider::Gcp,
            Provider::Azure,
        ]
    }

    /// Identifier used in QHub configuration files
    pub fn id(&self) -> &'static str {
        match self {
            Provider::Local => "local",
            Provider::DigitalOcean => "do",
            Provider::Aws => "aws",
            Provider::Gcp => "gcp",
            Provider::Azure => "azure",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Provider::Local => "Local",
            Provider::DigitalOcean => "DigitalOcean",
            Provider::Aws => "AWS",
            Provider::Gcp => "GCP",
            Provider::Azure => "Azure",
        }
    }
}

/// CI/CD providers QHub can render workflows for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CiCd {
    GithubActions,
    GitlabCi,
}

impl CiCd {
    pub fn all() -> &'static [CiCd] {
        &[CiCd::GithubActions, CiCd::GitlabCi]
    }

    pub fn id(&self) -> &'static str {
        match self {
            CiCd::GithubActions => "github-actions",
            CiCd::GitlabCi => "gitlab-ci",
        }
    }
}

/// Fields of the project setup form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardField {
    #[default]
    ProjectName,
    Provider,
    CiCd,
    Domain,
}

impl WizardField {
    pub fn all() -> &'static [WizardField] {
        &[
            WizardField::ProjectName,
            WizardField::Provider,
            WizardField::CiCd,
            WizardField::Domain,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            WizardField::ProjectName => "Project Name",
            WizardField::Provider => "Provider",
            WizardField::CiCd => "CI/CD",
            WizardField::Domain => "Domain",
        }
    }

    /// Free-text fields are edited through the input buffer, the rest cycle
    pub fn is_text(&self) -> bool {
        matches!(self, WizardField::ProjectName | WizardField::Domain)
    }

    pub fn next(&self) -> Self {
        match self {
            WizardField::ProjectName => WizardField::Provider,
            WizardField::Provider => WizardField::CiCd,
            WizardField::CiCd => WizardField::Domain,
            WizardField::Domain => WizardField::ProjectName,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            WizardField::ProjectName => WizardField::Domain,
            WizardField::Provider => WizardField::ProjectName,
            WizardField::CiCd => WizardField::Provider,
            WizardField::Domain => WizardField::CiCd,
        }
    }
}
