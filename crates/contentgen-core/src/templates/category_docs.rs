//! Hand-written category bodies used by simulated generation and the M3 stub.

use crate::category::{capitalize, Category};

const TEMPLATES_BODY: &str = "### Professional Template Structure

**Header Section**
- Company branding and identification
- Document purpose and classification
- Version control and approval status

**Main Content Framework**
- Structured sections with clear hierarchy
- Standardized formatting and styling
- Modular components for easy customization

**Interactive Elements**
- Dynamic fields for user input
- Conditional logic for different scenarios
- Automated calculations and validations

**Footer and Metadata**
- Legal disclaimers and terms
- Contact information and support
- Revision history and change tracking

**Usage Guidelines**
1. Customize header information
2. Fill in relevant content sections
3. Review automated calculations
4. Validate all required fields
5. Generate final document version";

const IMAGES_BODY: &str = "### Visual Content Specifications

**Composition Guidelines**
- Rule of thirds application
- Focal point establishment
- Balance and symmetry considerations
- Depth and dimension creation

**Color Psychology**
- Brand color integration
- Emotional tone communication
- Accessibility and contrast ratios
- Cultural color associations

**Technical Requirements**
- Resolution and DPI specifications
- File format optimization
- Loading performance considerations
- Responsive display adaptation

**Contextual Enhancement**
- Memory-based visual preferences
- User interaction patterns
- Environmental adaptation
- Personalization features";

const VIDEOS_BODY: &str = "### Video Production Framework

**Pre-Production Planning**
- Storyboard development with memory context
- Script writing with narrative flow
- Casting and talent coordination
- Location scouting and setup

**Production Execution**
- Multi-camera shooting techniques
- Audio capture optimization
- Lighting and visual effects
- Real-time performance monitoring

**Post-Production Process**
- Video editing and sequencing
- Audio mixing and enhancement
- Visual effects integration
- Quality control and review

**Distribution Strategy**
- Platform optimization
- Audience targeting
- Engagement measurement
- Performance analytics";

const CODE_BODY: &str = "### Code Architecture

**Core Structure**
```typescript
interface M3AgentCode {
  memory: MemoryGraph
  reasoning: ReasoningEngine
  generation: ContentGenerator
}

class ContentGenerator {
  private memoryGraph: MemoryGraph

  async generate(prompt: string): Promise<string> {
    const context = await this.memoryGraph.retrieve(prompt)
    return this.processWithMemory(prompt, context)
  }
}
```

**Key Components**
- Memory graph integration
- Context-aware processing
- Intelligent code suggestions
- Automated testing and validation

**Best Practices**
- Modular architecture design
- Comprehensive error handling
- Performance optimization
- Security considerations";

const AUTOMATION_BODY: &str = "### Intelligent Automation Workflow

**Process Analysis**
- Current workflow mapping
- Bottleneck identification
- Efficiency measurement
- Improvement opportunities

**Automation Design**
- Rule-based decision making
- Conditional logic implementation
- Error handling and recovery
- Monitoring and alerting

**Integration Points**
- API connections and data flow
- User interface components
- Database interactions
- External service integrations

**Performance Metrics**
- Processing speed improvements
- Error rate reduction
- Cost savings calculation
- User satisfaction scores";

/// Body for a category key. Keys without a hand-written body get a generic one built
/// around the prompt.
pub fn category_body(key: &str, prompt: &str) -> String {
    let fixed = match Category::from_key(key) {
        Some(Category::Templates) => Some(TEMPLATES_BODY),
        Some(Category::Images) => Some(IMAGES_BODY),
        Some(Category::Videos) => Some(VIDEOS_BODY),
        Some(Category::Code) => Some(CODE_BODY),
        Some(Category::Automation) => Some(AUTOMATION_BODY),
        _ => None,
    };
    if let Some(body) = fixed {
        return body.to_string();
    }

    format!(
        "### Enhanced {name} Content

**Custom Generation Based on: \"{prompt}\"**

**Key Features:**
- Memory-enhanced content generation
- Context-aware processing
- Intelligent adaptation
- Quality optimization

**Content Structure:**
1. Introduction and overview
2. Main content sections
3. Practical applications
4. Implementation guidelines
5. Success metrics and evaluation",
        name = capitalize(key.trim()),
        prompt = prompt,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hand_written_bodies_ignore_prompt() {
        let body = category_body("videos", "ignored");
        assert!(body.starts_with("### Video Production Framework"));
        assert!(!body.contains("ignored"));
    }

    #[test]
    fn generic_body_quotes_prompt() {
        let body = category_body("puzzles", "logic grid");
        assert!(body.contains("### Enhanced Puzzles Content"));
        assert!(body.contains("\"logic grid\""));
    }
}
