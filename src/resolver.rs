//! # URL Resolution
//!
//! Turns a repository web URL into a [`FetchPlan`]: the owner, repository,
//! branch and in-repository subpath that drive the download.
//!
//! Accepted URLs look like
//! `https://<host>/<owner>/<repo>[/tree/<branch>/<subpath...>]`. When the
//! `tree/<branch>` part is absent the repository's default branch is looked
//! up through [`HostOperations::default_branch`].
//!
//! A `tree/` URL is parsed positionally: only the first segment after
//! `tree` is taken as the branch. Branches reported by the metadata
//! endpoint are used verbatim, slashes included.

use std::borrow::Cow;

use log::debug;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use url::Url;

use crate::defaults::{API_HOST_PREFIX, TREE_SEGMENT};
use crate::error::{Error, Result};
use crate::host::HostOperations;
use crate::path;

/// Characters escaped when a decoded name goes back into a request path.
///
/// `/` is left alone so slash-named branches keep their segments.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn encode(name: &str) -> Cow<'_, str> {
    utf8_percent_encode(name, PATH_SEGMENT).into()
}

/// A parsed repository URL whose branch may still be unknown.
///
/// Owner, repository, branch and subpath are percent-decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoUrl {
    /// `<scheme>://<host>[:<port>]` of the input URL
    pub origin: String,
    pub scheme: String,
    /// Host including a non-default port, e.g. `github.com` or `127.0.0.1:8080`
    pub host: String,
    pub owner: String,
    pub repository: String,
    /// Branch from a `tree/<branch>` URL, `None` for bare repository URLs
    pub branch: Option<String>,
    pub subpath: String,
}

/// The resolved (owner, repository, branch, subpath) tuple.
///
/// `subpath` is empty for a whole-repository copy; otherwise it never
/// starts or ends with `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchPlan {
    pub owner: String,
    pub repository: String,
    pub branch: String,
    pub subpath: String,
}

/// Where metadata and archives are fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Base of archive URLs, e.g. `https://github.com`
    pub web_origin: String,
    /// Base of metadata URLs, e.g. `https://api.github.com`
    pub api_base: String,
}

impl Endpoints {
    /// Derives the endpoints from a parsed URL, optionally overriding the
    /// metadata API base.
    pub fn for_url(repo_url: &RepoUrl, api_override: Option<&str>) -> Self {
        let api_base = match api_override {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => {
                let host = repo_url.host.strip_prefix("www.").unwrap_or(&repo_url.host);
                format!("{}://{}{}", repo_url.scheme, API_HOST_PREFIX, host)
            }
        };
        Self {
            web_origin: repo_url.origin.clone(),
            api_base,
        }
    }

    /// URL of the repository metadata document.
    pub fn metadata_url(&self, owner: &str, repository: &str) -> String {
        format!(
            "{}/repos/{}/{}",
            self.api_base,
            encode(owner),
            encode(repository)
        )
    }

    /// URL of the zip snapshot for the plan's branch.
    pub fn archive_url(&self, plan: &FetchPlan) -> String {
        format!(
            "{}/{}/{}/archive/refs/heads/{}.zip",
            self.web_origin,
            encode(&plan.owner),
            encode(&plan.repository),
            encode(&plan.branch)
        )
    }
}

impl FetchPlan {
    /// Whether the whole repository was requested.
    pub fn is_whole_repository(&self) -> bool {
        self.subpath.is_empty()
    }

    /// Name of the archive's top-level directory.
    pub fn archive_root(&self) -> String {
        path::archive_root(&self.repository, &self.branch)
    }

    /// Prefix selecting this plan's entries inside the archive.
    pub fn subtree_prefix(&self) -> String {
        path::subtree_prefix(&self.archive_root(), &self.subpath)
    }

    /// Name of the directory the copy lands in.
    ///
    /// The last subpath segment, or the repository name for a
    /// whole-repository copy.
    pub fn destination_name(&self) -> &str {
        if self.is_whole_repository() {
            &self.repository
        } else {
            path::last_segment(&self.subpath)
        }
    }
}

/// Parses a repository or folder URL without any network access.
pub fn parse_repo_url(input: &str) -> Result<RepoUrl> {
    let invalid = |message: &str| Error::InvalidUrl {
        url: input.to_string(),
        message: message.to_string(),
    };

    let url = Url::parse(input.trim()).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("expected an http or https URL"));
    }
    let host_name = url.host_str().ok_or_else(|| invalid("missing host"))?;
    let host = match url.port() {
        Some(port) => format!("{}:{}", host_name, port),
        None => host_name.to_string(),
    };

    let segments = url
        .path_segments()
        .map(|segments| {
            segments
                .filter(|s| !s.is_empty())
                .map(|s| percent_decode_str(s).decode_utf8())
                .collect::<std::result::Result<Vec<_>, _>>()
        })
        .transpose()
        .map_err(|_| invalid("path is not valid UTF-8 once decoded"))?
        .unwrap_or_default();
    let segments: Vec<&str> = segments.iter().map(|s| &**s).collect();

    let owner = segments
        .first()
        .copied()
        .ok_or_else(|| invalid("missing repository owner"))?;
    let repository = segments
        .get(1)
        .copied()
        .map(|name| name.strip_suffix(".git").unwrap_or(name))
        .filter(|name| !name.is_empty())
        .ok_or_else(|| invalid("missing repository name"))?;

    let (branch, subpath) = match segments.get(2) {
        Some(&TREE_SEGMENT) => {
            let branch = segments
                .get(3)
                .copied()
                .ok_or_else(|| invalid("missing branch after 'tree'"))?;
            (Some(branch.to_string()), segments[4..].join("/"))
        }
        _ => (None, String::new()),
    };

    Ok(RepoUrl {
        origin: url.origin().ascii_serialization(),
        scheme: url.scheme().to_string(),
        host,
        owner: owner.to_string(),
        repository: repository.to_string(),
        branch,
        subpath,
    })
}

/// Completes a parsed URL into a [`FetchPlan`], looking up the default
/// branch when the URL names none.
pub fn resolve(
    repo_url: &RepoUrl,
    endpoints: &Endpoints,
    host: &dyn HostOperations,
) -> Result<FetchPlan> {
    let branch = match &repo_url.branch {
        Some(branch) => branch.clone(),
        None => {
            let metadata_url = endpoints.metadata_url(&repo_url.owner, &repo_url.repository);
            let branch = host.default_branch(&metadata_url)?;
            debug!("default branch of {}/{} is {}", repo_url.owner, repo_url.repository, branch);
            branch
        }
    };

    Ok(FetchPlan {
        owner: repo_url.owner.clone(),
        repository: repo_url.repository.clone(),
        branch,
        subpath: repo_url.subpath.clone(),
    })
}
