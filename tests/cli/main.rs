use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Ok, Result};
use insta::Settings;
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod analyze;
mod init;
mod sync;

const BIN_NAME: &str = "parley";

/// A temporary Next.js project driven through the built binary.
pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stops the config search from leaving the project.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project with every wiring file in place and one translated locale.
    pub fn clean_project() -> Result<Self> {
        let test = Self::new()?;
        test.write_file(
            "src/app/[locale]/layout.tsx",
            r#"import { Inter } from "next/font/google";

export const viewport = { width: "device-width", initialScale: 1 };

export default function RootLayout({ children }) {
  return <html><body>{children}</body></html>;
}
"#,
        )?;
        test.write_file(
            "src/app/[locale]/page.tsx",
            r#"'use client';
import { useTranslations } from "next-intl";

export default function Home() {
  const t = useTranslations("home");
  return <div className="w-full md:w-1/2"><h1>{t("title")}</h1></div>;
}
"#,
        )?;
        test.write_file(
            "src/i18n/routing.ts",
            "export const routing = defineRouting({ locales: ['en', 'es'], defaultLocale: 'en', localePrefix: 'always' });\n",
        )?;
        test.write_file("src/i18n/request.ts", "export default getRequestConfig;\n")?;
        test.write_file("middleware.ts", "export default createMiddleware(routing);\n")?;
        test.write_file(".env.local", "NEXT_PUBLIC_API_URL=https://api.example.com\n")?;
        test.write_file("messages/en.json", r#"{"home": {"title": "Welcome"}}"#)?;
        test.write_file("messages/es.json", r#"{"home": {"title": "Bienvenido"}}"#)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    /// Snapshot settings masking the temporary project directory.
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::clone_current();
        settings.add_filter(
            &regex::escape(&self.project_dir.display().to_string()),
            "[PROJECT_DIR]",
        );
        settings
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn analyze_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("analyze");
        cmd
    }

    pub fn sync_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("sync");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    pub fn read_json(&self, path: &str) -> Result<serde_json::Value> {
        let content = self.read_file(path)?;
        serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path))
    }
}
