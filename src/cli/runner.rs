//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::cli::render::{render_stream, OutputMode};
use crate::client::{ClientProvider, RecordService};
use crate::error::{Error, Result};
use crate::profile::display_name;
use crate::types::{QueryFilter, RegistrationOpts, StringMap};
use std::io::Write;
use tracing::{debug, info, warn};

/// Program name used to prefix diagnostics
pub const PROGRAM: &str = "e3db-cli";

/// Options that apply to every command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalOptions {
    /// Force client request logging on
    pub debug: bool,
    /// Profile selector; empty selects the default profile
    pub profile: String,
}

impl From<&Cli> for GlobalOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            debug: cli.debug,
            profile: cli.profile.clone(),
        }
    }
}

/// CLI runner
#[derive(Debug, Clone)]
pub struct Runner {
    options: GlobalOptions,
    command: Commands,
}

impl Runner {
    /// Create a new runner from parsed arguments
    pub fn new(cli: Cli) -> Self {
        let options = GlobalOptions::from(&cli);
        Self::with_options(options, cli.command)
    }

    /// Create a runner from already-resolved parts
    pub fn with_options(options: GlobalOptions, command: Commands) -> Self {
        Self { options, command }
    }

    /// Name of the command this runner executes
    pub fn command_name(&self) -> &'static str {
        self.command.name()
    }

    /// Run the command
    ///
    /// Results go to `out`. The named-profile echo and non-fatal reports go
    /// to `err`. A returned error is fatal for the invocation.
    pub async fn run<P: ClientProvider>(
        &self,
        provider: &P,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<()> {
        debug!("Running {} with {:?}", self.command_name(), self.options);

        match &self.command {
            Commands::Register { email } => self.register(provider, email, out).await,
            Commands::List {
                data,
                json,
                types,
                records,
                writers,
                users,
            } => {
                let filter = QueryFilter {
                    content_types: types.clone(),
                    record_ids: records.clone(),
                    writer_ids: writers.clone(),
                    user_ids: users.clone(),
                    include_data: *data,
                };
                let client = self.resolve_client(provider, err)?;
                self.list(&client, filter, OutputMode::from_json_flag(*json), out)
                    .await
            }
            Commands::Read { record_ids } => {
                let client = self.resolve_client(provider, err)?;
                self.read(&client, record_ids, out).await
            }
            Commands::Write { record_type, data } => {
                let client = self.resolve_client(provider, err)?;
                self.write(&client, record_type, data, out, err).await
            }
        }
    }

    // ========================================================================
    // Client resolution
    // ========================================================================

    /// Build the client for the selected profile
    ///
    /// For a named profile `--debug` forces request logging on (never off)
    /// and the resolved configuration is echoed to `err`.
    fn resolve_client<P: ClientProvider>(
        &self,
        provider: &P,
        err: &mut dyn Write,
    ) -> Result<P::Client> {
        let profile = &self.options.profile;
        if profile.is_empty() {
            debug!("Using default profile");
            return provider.default_client();
        }

        let mut config = provider.load_config(profile)?;
        if self.options.debug {
            config.logging = true;
        }
        let shown = config.to_string();

        let client = provider.build_client(config)?;
        writeln!(err, "{shown}")?;
        info!("Using profile {profile}");
        Ok(client)
    }

    // ========================================================================
    // Commands
    // ========================================================================

    async fn list<C: RecordService>(
        &self,
        client: &C,
        filter: QueryFilter,
        mode: OutputMode,
        out: &mut dyn Write,
    ) -> Result<()> {
        debug!("Querying with {filter:?}");
        let count = render_stream(client.query(filter), mode, out).await?;
        info!("Listed {count} records");
        Ok(())
    }

    async fn read<C: RecordService>(
        &self,
        client: &C,
        record_ids: &[String],
        out: &mut dyn Write,
    ) -> Result<()> {
        for record_id in record_ids {
            let record = client.read(record_id).await?;
            writeln!(out, "{}", serde_json::to_string_pretty(&record)?)?;
            out.flush()?;
            info!("Read record {record_id}");
        }
        Ok(())
    }

    /// Store a new record
    ///
    /// A payload that fails to decode is reported and the record is written
    /// with empty data.
    async fn write<C: RecordService>(
        &self,
        client: &C,
        record_type: &str,
        data: &str,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<()> {
        let mut record = client.new_record(record_type);

        match decode_data(data) {
            Ok(decoded) => record.data = decoded,
            Err(e) => {
                warn!("Record data did not decode: {e}");
                writeln!(err, "{PROGRAM}: write: {}", Error::from(e))?;
            }
        }

        let record_id = client.write(record).await?;
        writeln!(out, "{record_id}")?;
        info!("Wrote {record_type} record {record_id}");
        Ok(())
    }

    /// Register a client and save it under the selected profile
    ///
    /// An existing profile is rejected before the service is contacted. The
    /// save itself refuses to overwrite, so a profile created in between is
    /// still caught.
    async fn register<P: ClientProvider>(
        &self,
        provider: &P,
        email: &str,
        out: &mut dyn Write,
    ) -> Result<()> {
        validate_email(email)?;

        let profile = &self.options.profile;
        if provider.profile_exists(profile) {
            return Err(Error::ProfileExists {
                name: display_name(profile).to_string(),
            });
        }

        let opts = RegistrationOpts {
            logging: self.options.debug,
        };
        let registered = provider.register(email, opts).await?;

        provider
            .save_config(profile, &registered)
            .map_err(|e| Error::save_profile(display_name(profile), &e))?;

        writeln!(out, "{}", registered.client_id)?;
        info!(
            "Saved client {} as profile {}",
            registered.client_id,
            display_name(profile)
        );
        Ok(())
    }
}

/// Decode the leading JSON object of a write payload
///
/// Input after the first complete value is ignored.
fn decode_data(data: &str) -> serde_json::Result<StringMap> {
    let mut values = serde_json::Deserializer::from_str(data).into_iter::<StringMap>();
    match values.next() {
        Some(decoded) => decoded,
        None => serde_json::from_str(data),
    }
}

/// Require exactly one `@` with something on either side
pub fn validate_email(email: &str) -> Result<()> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(Error::InvalidEmail {
            email: email.to_string(),
        })
    }
}
