use crate::core::source::Source;
use crate::error::{Result, SiteError};
use crate::utils::BufferWriter;
use bytes::BytesMut;
use smallvec::SmallVec;
use std::{borrow::Cow, fmt};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Directive {
    name: Cow<'static, str>,
    sources: SmallVec<[Source; 4]>,
}

impl Directive {
    #[inline]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            sources: SmallVec::new(),
        }
    }

    pub fn with_sources<I>(name: impl Into<Cow<'static, str>>, sources: I) -> Self
    where
        I: IntoIterator<Item = Source>,
    {
        let mut directive = Self::new(name);
        directive.add_sources(sources);
        directive
    }

    /// `'none'` replaces everything before it and is itself replaced by the
    /// next real source. Duplicates are dropped.
    pub fn add_source(&mut self, source: Source) -> &mut Self {
        if source.is_none() {
            self.sources.clear();
            self.sources.push(source);
        } else if !self.sources.is_empty() && self.sources[0].is_none() {
            self.sources.clear();
            self.sources.push(source);
        } else if !self.sources.iter().any(|s| s == &source) {
            self.sources.push(source);
        }
        self
    }

    pub fn add_sources<I>(&mut self, sources: I) -> &mut Self
    where
        I: IntoIterator<Item = Source>,
    {
        for source in sources {
            self.add_source(source);
        }
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn validate(&self) -> Result<()> {
        if self.sources.len() > 1 && self.sources.iter().any(|s| s.is_none()) {
            return Err(SiteError::ValidationError(format!(
                "Directive '{}' contains 'none' with other sources",
                self.name
            )));
        }

        for source in &self.sources {
            let empty = match source {
                Source::Host(value) | Source::Scheme(value) | Source::Nonce(value) => {
                    value.is_empty()
                }
                _ => false,
            };
            if empty {
                return Err(SiteError::ValidationError(format!(
                    "Directive '{}' contains an empty source token",
                    self.name
                )));
            }
        }

        Ok(())
    }

    #[inline]
    pub fn estimated_size(&self) -> usize {
        let mut size = self.name.len();

        if !self.sources.is_empty() {
            size += self.sources.len();
            size += self
                .sources
                .iter()
                .map(|s| s.estimated_size())
                .sum::<usize>();
        }

        size
    }

    #[inline]
    pub fn contains_nonce(&self) -> bool {
        self.sources.iter().any(|s| s.contains_nonce())
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for source in &self.sources {
            write!(f, " {}", source)?;
        }
        Ok(())
    }
}

impl BufferWriter for Directive {
    fn write_to_buffer(&self, buffer: &mut BytesMut) {
        buffer.extend_from_slice(self.name.as_bytes());
        for source in &self.sources {
            buffer.extend_from_slice(b" ");
            source.write_to_buffer(buffer);
        }
    }
}
